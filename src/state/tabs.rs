// Tab selection for the app settings page

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Keymapping,
    Graphics,
    Bypass,
    Info,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Keymapping,
        SettingsTab::Graphics,
        SettingsTab::Bypass,
        SettingsTab::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Keymapping => "Keymapping",
            SettingsTab::Graphics => "Graphics",
            SettingsTab::Bypass => "Bypass",
            SettingsTab::Info => "Info",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        if self.index() == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[self.index() - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(SettingsTab::Keymapping.next(), SettingsTab::Graphics);
        assert_eq!(SettingsTab::Info.next(), SettingsTab::Keymapping);
        assert_eq!(SettingsTab::Keymapping.prev(), SettingsTab::Info);
        assert_eq!(SettingsTab::Bypass.prev(), SettingsTab::Graphics);
    }
}
