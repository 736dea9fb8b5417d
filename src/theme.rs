//! Colors and styles for every UI component.
//!
//! Render files use `theme::module::CONSTANT`; they never hardcode `Color::*`.
//!
//! Theme: Indigo on slate, echoing the exported HTML report

use ratatui::style::{Color, Modifier, Style};

/// Shared base palette
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(226, 232, 240);
    pub const TEXT_DIM: Color = Color::Rgb(100, 116, 139);
    pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_SURFACE: Color = Color::Rgb(30, 41, 59);

    pub const INDIGO: Color = Color::Rgb(129, 140, 248);
    pub const INDIGO_DEEP: Color = Color::Rgb(79, 70, 229);
    pub const EMERALD: Color = Color::Rgb(52, 211, 153);
    pub const AMBER: Color = Color::Rgb(251, 191, 36);
    pub const ROSE: Color = Color::Rgb(251, 113, 133);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// View tabs at the top of the screen
pub mod tabs {
    use super::*;

    pub const ACTIVE: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::INDIGO_DEEP)
        .add_modifier(Modifier::BOLD);
    pub const INACTIVE: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const SOURCE: Color = palette::TEXT_DIM;
}

/// Filter input fields
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::INDIGO;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
}

/// Drops view (record blocks)
pub mod drops {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BADGE: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::INDIGO_DEEP)
        .add_modifier(Modifier::BOLD);
    pub const TIME: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const ITEM_COUNT: Color = palette::TEXT_MUTED;
    pub const BULLET: Color = palette::INDIGO;
    pub const VALUE: Color = palette::TEXT;
}

/// Stats view (frequency table)
pub mod stats {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const HEADER: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    pub const VALUE: Color = palette::TEXT;
    pub const COUNT: Style = Style::new()
        .fg(palette::INDIGO)
        .add_modifier(Modifier::BOLD);
    pub const BAR_FILLED: Color = palette::INDIGO;
    pub const BAR_EMPTY: Color = palette::BG_SURFACE;
    pub const RESULT_COUNT: Color = palette::TEXT_MUTED;
    pub const NO_MATCHES: Color = palette::TEXT_MUTED;
}

/// Messages shown instead of content (loading, empty dataset)
pub mod placeholder {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    pub const BODY: Color = palette::TEXT_DIM;
}

/// Summary popup
pub mod summary {
    use super::*;

    pub const BORDER: Color = palette::EMERALD;
    pub const TITLE: Style = Style::new()
        .fg(palette::EMERALD)
        .add_modifier(Modifier::BOLD);
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TEXT: Color = palette::TEXT;
    pub const PENDING: Color = palette::AMBER;
    pub const FAILED: Color = palette::ROSE;
    pub const HINT: Color = palette::TEXT_DIM;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::INDIGO,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::AMBER,
        border: palette::AMBER,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: Color::Rgb(190, 18, 60),
        border: palette::ROSE,
    };
}

/// Help line (bottom status bar)
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

pub mod scrollbar {
    use super::*;

    pub const DEFAULT: Color = palette::INDIGO;
}
