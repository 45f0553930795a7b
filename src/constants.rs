// Constants module - centralized default values for the watermark engine
//
// Panel geometry, paddings, colors and text settings are fixed design values.
// Only the preferred panel size, font, logo and alignment are configurable.

// =============================================================================
// Panel defaults
// =============================================================================

/// Default preferred panel width: 25 fixed-width characters of 10px plus 10px
/// padding on each side.
pub const DEFAULT_PANEL_WIDTH: u32 = 270;

/// Default preferred panel height: one line of 15px text plus 10px padding on
/// each side.
pub const DEFAULT_PANEL_HEIGHT: u32 = 35;

/// Default built-in font (largest of the ramp).
pub const DEFAULT_BUILTIN_FONT: u8 = 5;

/// Number of fonts in the built-in ramp (valid indices are 1..=5).
pub const BUILTIN_FONT_COUNT: u8 = 5;

// =============================================================================
// Padding
// =============================================================================

/// Padding between the panel edge and its logo or text.
pub const PANEL_PADDING: u32 = 10;

/// Horizontal room the default layout reserves around a logo (left + right).
pub const BASE_LOGO_PADDING_X: u32 = 20;

/// Vertical room the default layout reserves below a logo.
pub const BASE_LOGO_PADDING_Y: u32 = 10;

/// Horizontal room the wide layout reserves beside a logo.
pub const WIDE_LOGO_PADDING_X: u32 = 10;

/// Vertical room the wide layout reserves around a logo (top + bottom).
pub const WIDE_LOGO_PADDING_Y: u32 = 20;

/// The default layout insets the panel by 1/4 of the image height.
pub const BASE_VERTICAL_INSET_DIVISOR: u32 = 4;

// =============================================================================
// Text
// =============================================================================

/// Text size in pixels for TrueType fonts.
pub const TEXT_SIZE_PX: f32 = 16.0;

// =============================================================================
// Encoding
// =============================================================================

/// JPEG quality used when re-encoding JPEG sources.
pub const JPEG_QUALITY: u8 = 90;
