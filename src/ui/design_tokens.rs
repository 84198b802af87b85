// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the toast design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create the progress track color
let track = Color {
    a: opacity::PROGRESS_TRACK,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Semantic colors (toast backgrounds)
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #F44336
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0); // #FF9800
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953); // #2196F3
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Progress bar fill over the toast background
    pub const PROGRESS_TRACK: f32 = 0.3;

    /// Toast shadow
    pub const SHADOW: f32 = 0.25;

    /// Toast card while pressed
    pub const PRESSED: f32 = 0.8;

    /// Secondary text (message below the title)
    pub const TEXT_SECONDARY: f32 = 0.9;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 20.0;

    /// Resting width of a toast card
    pub const TOAST_WIDTH: f32 = 360.0;

    /// Height of the progress bar
    pub const PROGRESS_HEIGHT: f32 = 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast title
    pub const TITLE: f32 = 16.0;

    /// Toast message
    pub const BODY: f32 = 14.0;

    /// Type glyph
    pub const ICON: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 2.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 3.84,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PROGRESS_TRACK > 0.0 && opacity::PROGRESS_TRACK < 1.0);
    assert!(opacity::PRESSED > 0.0 && opacity::PRESSED < 1.0);

    // Typography validation
    assert!(typography::TITLE > typography::BODY);

    // Sizing validation
    assert!(sizing::TOAST_WIDTH > sizing::ICON_MD);
};
