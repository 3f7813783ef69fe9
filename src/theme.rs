/// Named colors for one look of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card_background: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#F5F5F7",
    card_background: "#FFFFFF",
    text: "#1D1D1F",
    text_secondary: "#8E8E93",
    border: "#E5E5EA",
    accent: "#6A67CE",
};

pub const DARK: Palette = Palette {
    background: "#1D1D1F",
    card_background: "#2C2C2E",
    text: "#F5F5F7",
    text_secondary: "#8E8E93",
    border: "#38383A",
    accent: "#6A67CE",
};

impl Palette {
    /// Inline style declaring the palette as CSS custom properties.
    ///
    /// Every themed element reads `var(--...)`, so swapping this one string
    /// on the root swaps the whole page at once.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --card-bg: {}; --text: {}; --text-secondary: {}; --border: {}; --accent: {};",
            self.background,
            self.card_background,
            self.text,
            self.text_secondary,
            self.border,
            self.accent
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Value for the `color-scheme` property so native widgets follow along.
    pub fn color_scheme(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Translucent card fill used by the glass panels.
    pub fn glass(self) -> &'static str {
        match self {
            Self::Light => "rgba(255, 255, 255, 0.6)",
            Self::Dark => "rgba(44, 44, 46, 0.6)",
        }
    }

    pub fn card_shadow(self) -> &'static str {
        match self {
            Self::Light => "0 8px 30px rgba(0,0,0,0.1)",
            Self::Dark => "0 8px 30px rgba(0,0,0,0.3)",
        }
    }

    pub fn control_shadow(self) -> &'static str {
        match self {
            Self::Light => "0 4px 20px rgba(0,0,0,0.1)",
            Self::Dark => "0 4px 20px rgba(0,0,0,0.3)",
        }
    }

    /// Accent tint behind badges and social icons.
    pub fn accent_tint(self) -> &'static str {
        match self {
            Self::Light => "rgba(106, 103, 206, 0.1)",
            Self::Dark => "rgba(106, 103, 206, 0.15)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}
