use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};

/// Built-in color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeName {
    #[default]
    Opencode,
    Catppuccin,
    Tokyonight,
}

/// Palette plus the derived styles used by the screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(ThemeName::default())
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Opencode => Self {
                name,
                primary: Color::Rgb(0x00, 0xD4, 0xAA),
                accent: Color::Rgb(0x00, 0xFF, 0xD4),
                success: Color::Rgb(0x00, 0xD2, 0x6A),
                error: Color::Rgb(0xFF, 0x6B, 0x6B),
                warning: Color::Rgb(0xFF, 0xD9, 0x3D),
                info: Color::Rgb(0x4E, 0xCD, 0xC4),
                text: Color::Rgb(0xE8, 0xE8, 0xE8),
                muted: Color::Rgb(0x88, 0x88, 0x88),
                dim: Color::Rgb(0x55, 0x55, 0x55),
                border: Color::Rgb(0x3D, 0x4F, 0x5F),
            },
            ThemeName::Catppuccin => Self {
                name,
                primary: Color::Rgb(0x89, 0xB4, 0xFA),
                accent: Color::Rgb(0x94, 0xE2, 0xD5),
                success: Color::Rgb(0xA6, 0xE3, 0xA1),
                error: Color::Rgb(0xF3, 0x8B, 0xA8),
                warning: Color::Rgb(0xF9, 0xE2, 0xAF),
                info: Color::Rgb(0x89, 0xDC, 0xEB),
                text: Color::Rgb(0xCD, 0xD6, 0xF4),
                muted: Color::Rgb(0xA6, 0xAD, 0xC8),
                dim: Color::Rgb(0x6C, 0x70, 0x86),
                border: Color::Rgb(0x45, 0x47, 0x5A),
            },
            ThemeName::Tokyonight => Self {
                name,
                primary: Color::Rgb(0x7A, 0xA2, 0xF7),
                accent: Color::Rgb(0x7D, 0xCF, 0xFF),
                success: Color::Rgb(0x9E, 0xCE, 0x6A),
                error: Color::Rgb(0xF7, 0x76, 0x8E),
                warning: Color::Rgb(0xE0, 0xAF, 0x68),
                info: Color::Rgb(0x2A, 0xC3, 0xDE),
                text: Color::Rgb(0xC0, 0xCA, 0xF5),
                muted: Color::Rgb(0xA9, 0xB1, 0xD6),
                dim: Color::Rgb(0x56, 0x5F, 0x89),
                border: Color::Rgb(0x3B, 0x42, 0x61),
            },
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Key hint in the help bar, e.g. `[Enter]`
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Status mark for a present / absent dependency
    pub fn status_icon(present: bool) -> &'static str {
        if present {
            "✓"
        } else {
            "✗"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opencode() {
        let theme = Theme::default();
        assert_eq!(theme.name, ThemeName::Opencode);
        assert_eq!(theme.primary, Color::Rgb(0x00, 0xD4, 0xAA));
    }

    #[test]
    fn test_themes_differ() {
        let catppuccin = Theme::from_name(ThemeName::Catppuccin);
        let tokyonight = Theme::from_name(ThemeName::Tokyonight);
        assert_ne!(catppuccin.primary, tokyonight.primary);
        assert_eq!(tokyonight.error, Color::Rgb(0xF7, 0x76, 0x8E));
    }
}
