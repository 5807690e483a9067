#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Companies,
    Themes,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Companies, Self::Themes];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Themes => "themes",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Companies),
            1 => Some(Self::Themes),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Companies => 0,
            Self::Themes => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Companies => "Companies",
            Self::Themes => "Macro Themes",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Companies => Self::Themes,
            Self::Themes => Self::Companies,
        }
    }
}
