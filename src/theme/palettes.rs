//! Built-in color palettes, one per theme/mode combination

use ratatui::style::Color;

use super::Theme;

/// Purple theme, dark mode (the default)
pub const PURPLE_DARK: Theme = Theme {
    name: "Purple Dark",

    bg_primary: Color::Rgb(16, 14, 28),    // #100e1c
    bg_secondary: Color::Rgb(27, 23, 46),  // #1b172e
    bg_tertiary: Color::Rgb(47, 40, 77),   // #2f284d

    fg_primary: Color::Rgb(214, 209, 232), // #d6d1e8
    fg_secondary: Color::Rgb(235, 232, 247), // #ebe8f7
    fg_muted: Color::Rgb(122, 113, 156),   // #7a719c

    accent_primary: Color::Rgb(167, 122, 247),   // #a77af7
    accent_secondary: Color::Rgb(122, 162, 247), // #7aa2f7

    success: Color::Rgb(158, 206, 106), // #9ece6a
    warning: Color::Rgb(224, 175, 104), // #e0af68
    error: Color::Rgb(247, 118, 142),   // #f7768e

    border: Color::Rgb(47, 40, 77),          // #2f284d
    border_focused: Color::Rgb(167, 122, 247), // #a77af7
    selection: Color::Rgb(54, 42, 94),       // #362a5e
    code: Color::Rgb(187, 154, 247),         // #bb9af7
};

/// Purple theme, light mode
pub const PURPLE_LIGHT: Theme = Theme {
    name: "Purple Light",

    bg_primary: Color::Rgb(246, 244, 252), // #f6f4fc
    bg_secondary: Color::Rgb(235, 231, 248), // #ebe7f8
    bg_tertiary: Color::Rgb(219, 211, 242), // #dbd3f2

    fg_primary: Color::Rgb(44, 38, 74),  // #2c264a
    fg_secondary: Color::Rgb(26, 22, 48), // #1a1630
    fg_muted: Color::Rgb(130, 122, 164), // #827aa4

    accent_primary: Color::Rgb(116, 66, 204),  // #7442cc
    accent_secondary: Color::Rgb(64, 103, 214), // #4067d6

    success: Color::Rgb(74, 144, 52),  // #4a9034
    warning: Color::Rgb(178, 122, 32), // #b27a20
    error: Color::Rgb(200, 56, 92),    // #c8385c

    border: Color::Rgb(219, 211, 242),        // #dbd3f2
    border_focused: Color::Rgb(116, 66, 204), // #7442cc
    selection: Color::Rgb(226, 215, 250),     // #e2d7fa
    code: Color::Rgb(116, 66, 204),           // #7442cc
};

/// Neon theme, dark mode
pub const NEON_DARK: Theme = Theme {
    name: "Neon Dark",

    bg_primary: Color::Rgb(8, 14, 16),     // #080e10
    bg_secondary: Color::Rgb(14, 27, 31),  // #0e1b1f
    bg_tertiary: Color::Rgb(24, 48, 55),   // #183037

    fg_primary: Color::Rgb(205, 235, 240), // #cdebf0
    fg_secondary: Color::Rgb(230, 250, 252), // #e6fafc
    fg_muted: Color::Rgb(96, 140, 148),    // #608c94

    accent_primary: Color::Rgb(54, 235, 204),  // #36ebcc
    accent_secondary: Color::Rgb(250, 230, 80), // #fae650

    success: Color::Rgb(120, 230, 120), // #78e678
    warning: Color::Rgb(250, 200, 70),  // #fac846
    error: Color::Rgb(255, 95, 125),    // #ff5f7d

    border: Color::Rgb(24, 48, 55),           // #183037
    border_focused: Color::Rgb(54, 235, 204), // #36ebcc
    selection: Color::Rgb(18, 62, 60),        // #123e3c
    code: Color::Rgb(54, 235, 204),           // #36ebcc
};

/// Neon theme, light mode
pub const NEON_LIGHT: Theme = Theme {
    name: "Neon Light",

    bg_primary: Color::Rgb(240, 250, 250), // #f0fafa
    bg_secondary: Color::Rgb(222, 242, 242), // #def2f2
    bg_tertiary: Color::Rgb(198, 230, 230), // #c6e6e6

    fg_primary: Color::Rgb(22, 50, 52),  // #163234
    fg_secondary: Color::Rgb(10, 34, 36), // #0a2224
    fg_muted: Color::Rgb(100, 140, 142), // #648c8e

    accent_primary: Color::Rgb(10, 150, 128),  // #0a9680
    accent_secondary: Color::Rgb(168, 140, 10), // #a88c0a

    success: Color::Rgb(46, 140, 46),  // #2e8c2e
    warning: Color::Rgb(172, 128, 24), // #ac8018
    error: Color::Rgb(204, 44, 80),    // #cc2c50

    border: Color::Rgb(198, 230, 230),        // #c6e6e6
    border_focused: Color::Rgb(10, 150, 128), // #0a9680
    selection: Color::Rgb(206, 240, 234),     // #cef0ea
    code: Color::Rgb(10, 150, 128),           // #0a9680
};

/// Cyberpunk theme, dark mode
pub const CYBERPUNK_DARK: Theme = Theme {
    name: "Cyberpunk Dark",

    bg_primary: Color::Rgb(20, 8, 24),     // #140818
    bg_secondary: Color::Rgb(36, 14, 44),  // #240e2c
    bg_tertiary: Color::Rgb(60, 24, 72),   // #3c1848

    fg_primary: Color::Rgb(240, 214, 235), // #f0d6eb
    fg_secondary: Color::Rgb(252, 235, 250), // #fcebfa
    fg_muted: Color::Rgb(150, 104, 146),   // #966892

    accent_primary: Color::Rgb(255, 64, 160),   // #ff40a0
    accent_secondary: Color::Rgb(64, 220, 255), // #40dcff

    success: Color::Rgb(140, 230, 110), // #8ce66e
    warning: Color::Rgb(255, 190, 64),  // #ffbe40
    error: Color::Rgb(255, 84, 112),    // #ff5470

    border: Color::Rgb(60, 24, 72),           // #3c1848
    border_focused: Color::Rgb(255, 64, 160), // #ff40a0
    selection: Color::Rgb(74, 22, 74),        // #4a164a
    code: Color::Rgb(64, 220, 255),           // #40dcff
};

/// Cyberpunk theme, light mode
pub const CYBERPUNK_LIGHT: Theme = Theme {
    name: "Cyberpunk Light",

    bg_primary: Color::Rgb(252, 242, 250), // #fcf2fa
    bg_secondary: Color::Rgb(246, 228, 244), // #f6e4f4
    bg_tertiary: Color::Rgb(236, 206, 234), // #ecceea

    fg_primary: Color::Rgb(58, 24, 56),  // #3a1838
    fg_secondary: Color::Rgb(40, 12, 38), // #280c26
    fg_muted: Color::Rgb(156, 112, 152), // #9c7098

    accent_primary: Color::Rgb(204, 24, 122),  // #cc187a
    accent_secondary: Color::Rgb(16, 132, 172), // #1084ac

    success: Color::Rgb(54, 138, 44),  // #368a2c
    warning: Color::Rgb(182, 120, 20), // #b67814
    error: Color::Rgb(206, 40, 78),    // #ce284e

    border: Color::Rgb(236, 206, 234),        // #ecceea
    border_focused: Color::Rgb(204, 24, 122), // #cc187a
    selection: Color::Rgb(246, 214, 238),     // #f6d6ee
    code: Color::Rgb(16, 132, 172),           // #1084ac
};
