//! Builder shell view state: target device, zoom, grid and snap toggles.
//!
//! DESIGN
//! ======
//! Presentation-only state, constructed fresh per builder visit. The canvas
//! holds no document model; snap is a stored flag with no placement logic
//! behind it.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

pub const ZOOM_MIN: u32 = 50;
pub const ZOOM_MAX: u32 = 200;
pub const ZOOM_STEP: u32 = 10;
pub const ZOOM_DEFAULT: u32 = 100;

/// Field types offered in the builder sidebar. Placement is not implemented.
pub const PALETTE_FIELDS: [&str; 8] =
    ["Text Input", "Email", "Phone", "Date", "Dropdown", "Text Area", "Checkbox", "Radio Button"];

/// Named canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DevicePreset {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Fixed set of target devices offered by the builder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceKey {
    #[default]
    Desktop169,
    Desktop1610,
    Desktop43,
    TabletPortrait,
    TabletLandscape,
    MobilePortrait,
    MobileLandscape,
}

impl DeviceKey {
    pub const ALL: [DeviceKey; 7] = [
        Self::Desktop169,
        Self::Desktop1610,
        Self::Desktop43,
        Self::TabletPortrait,
        Self::TabletLandscape,
        Self::MobilePortrait,
        Self::MobileLandscape,
    ];

    /// Stable key used as the `<option>` value.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Desktop169 => "desktop-169",
            Self::Desktop1610 => "desktop-1610",
            Self::Desktop43 => "desktop-43",
            Self::TabletPortrait => "tablet-portrait",
            Self::TabletLandscape => "tablet-landscape",
            Self::MobilePortrait => "mobile-portrait",
            Self::MobileLandscape => "mobile-landscape",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    #[must_use]
    pub fn preset(self) -> DevicePreset {
        let (label, width, height) = match self {
            Self::Desktop169 => ("Desktop 16:9 (1200×675)", 1200, 675),
            Self::Desktop1610 => ("Desktop 16:10 (1200×750)", 1200, 750),
            Self::Desktop43 => ("Desktop 4:3 (1024×768)", 1024, 768),
            Self::TabletPortrait => ("Tablet Portrait (768×1024)", 768, 1024),
            Self::TabletLandscape => ("Tablet Landscape (1024×768)", 1024, 768),
            Self::MobilePortrait => ("Mobile Portrait (375×667)", 375, 667),
            Self::MobileLandscape => ("Mobile Landscape (667×375)", 667, 375),
        };
        DevicePreset { label, width, height }
    }
}

/// Rendered canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Builder chrome state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderView {
    pub device: DeviceKey,
    zoom: u32,
    pub grid: bool,
    pub snap: bool,
}

impl Default for BuilderView {
    fn default() -> Self {
        Self { device: DeviceKey::default(), zoom: ZOOM_DEFAULT, grid: false, snap: true }
    }
}

impl BuilderView {
    /// Zoom percentage, always a multiple of [`ZOOM_STEP`] within the limits.
    #[must_use]
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
    }

    /// Select a device by its option key; unknown keys are ignored.
    pub fn select_device(&mut self, key: &str) {
        if let Some(device) = DeviceKey::from_key(key) {
            self.device = device;
        }
    }

    #[must_use]
    pub fn preset(&self) -> DevicePreset {
        self.device.preset()
    }

    /// Preset dimensions scaled by zoom, rounded half-up to whole pixels.
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        let preset = self.preset();
        CanvasSize { width: scale(preset.width, self.zoom), height: scale(preset.height, self.zoom) }
    }

    /// Header readout, e.g. `Canvas: 1200 × 675   Zoom: 100%`.
    #[must_use]
    pub fn readout(&self) -> String {
        let preset = self.preset();
        format!("Canvas: {} × {} \u{a0} Zoom: {}%", preset.width, preset.height, self.zoom)
    }
}

fn scale(px: u32, zoom: u32) -> u32 {
    (px * zoom + 50) / 100
}
