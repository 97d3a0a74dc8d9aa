//! The fixed gitmoji table offered in the emoji menu.

use serde::Serialize;

/// An emoji with the glyph shown in menus and the `:code:` written into messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Emoji {
    pub symbol: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

impl Emoji {
    /// The "no emoji" value.
    pub const fn none() -> Self {
        Self {
            symbol: "",
            code: "",
            description: "",
        }
    }

    pub fn is_none(&self) -> bool {
        self.code.is_empty()
    }

    /// Menu label, e.g. `🐛 (:bug:) -> Fix a bug`.
    ///
    /// Recommended entries get a leading magnifier so they stand out in the list.
    pub fn label(&self, recommended: bool) -> String {
        let prefix = if recommended { "🔍 " } else { "" };
        format!(
            "{}{} (:{}:) -> {}",
            prefix, self.symbol, self.code, self.description
        )
    }
}

const fn emoji(symbol: &'static str, code: &'static str, description: &'static str) -> Emoji {
    Emoji {
        symbol,
        code,
        description,
    }
}

pub static EMOJIS: [Emoji; 73] = [
    emoji("🎨", "art", "Improve structure / format of the code"),
    emoji("⚡", "zap", "Improve performance"),
    emoji("🔥", "fire", "Remove code or files"),
    emoji("🐛", "bug", "Fix a bug"),
    emoji("🚑", "ambulance", "Critical hotfix"),
    emoji("✨", "sparkles", "Introduce new features"),
    emoji("📝", "memo", "Add or update documentation"),
    emoji("🚀", "rocket", "Deploy stuff"),
    emoji("💄", "lipstick", "Add or update the UI and style files"),
    emoji("🎉", "tada", "Begin a project"),
    emoji("✅", "white_check_mark", "Add, update, or pass test"),
    emoji("🔒", "lock", "Fix security issues"),
    emoji("🔐", "closed_lock_with_key", "Add or update secrets"),
    emoji("🔖", "bookmark", "Release / version tags"),
    emoji("🚨", "rotating_light", "Fix compiler / linter warnings"),
    emoji("🚧", "construction", "Work in progress"),
    emoji("💚", "green_heart", "Fix CI build"),
    emoji("⬇️", "arrow_down", "Downgrade dependencies"),
    emoji("⬆️", "arrow_up", "Upgrade dependencies"),
    emoji("📌", "pushpin", "Pin dependencies to specific versions"),
    emoji("👷", "construction_worker", "Add or update CI build system"),
    emoji("📈", "chart_with_upwards_trend", "Add or update analytics or track code"),
    emoji("♻️", "recycle", "Refactor code"),
    emoji("➕", "heavy_plus_sign", "Add a dependency"),
    emoji("➖", "heavy_minus_sign", "Remove a dependency"),
    emoji("🔧", "wrench", "Add or update configuration files"),
    emoji("🔨", "hammer", "Add or update development scripts"),
    emoji("🌐", "globe_with_meridians", "Internationalization and localization"),
    emoji("✏️", "pencil2", "Fix typos"),
    emoji("💩", "poop", "Write bad code that needs to be improved"),
    emoji("⏪", "rewind", "Revert changes"),
    emoji("🔀", "twisted_rightwards_arrows", "Merge branches"),
    emoji("📦", "package", "Add or update compiled files or packages"),
    emoji("👽", "alien", "Update code due to external API changes"),
    emoji("🚚", "truck", "Move or rename resources (e.g.: files, paths, routes)"),
    emoji("📄", "page_facing_up", "Add or update license"),
    emoji("💥", "boom", "Introduce breaking changes"),
    emoji("🍱", "bento", "Add or update assets"),
    emoji("♿", "wheelchair", "Improve accessibility"),
    emoji("💡", "bulb", "Add or update comments in source code"),
    emoji("🍻", "beers", "Write code drunkenly"),
    emoji("💬", "speech_balloon", "Add or update text and literals"),
    emoji("🗃️", "card_file_box", "Perform database related changes"),
    emoji("🔊", "loud_sound", "Add or update logs"),
    emoji("🔇", "mute", "Remove logs"),
    emoji("👥", "busts_in_silhouette", "Add or update contributor(s)"),
    emoji("🚸", "children_crossing", "Improve user experience / usability"),
    emoji("🏗️", "building_construction", "Make architectural changes"),
    emoji("📱", "iphone", "Work on responsive design"),
    emoji("🤡", "clown_face", "Mock things"),
    emoji("🥚", "egg", "Add or update an easter egg"),
    emoji("🙈", "see_no_evil", "Add or update a .gitignore file"),
    emoji("📸", "camera_flash", "Add or update snapshots"),
    emoji("⚗️", "alembic", "Perform experiments"),
    emoji("🔍", "mag", "Improve SEO"),
    emoji("🏷️", "label", "Add or update types"),
    emoji("🌱", "seedling", "Add or update seed files"),
    emoji("🚩", "triangular_flag_on_post", "Add, update, or remove feature flags"),
    emoji("🥅", "goal_net", "Catch errors"),
    emoji("💫", "dizzy", "Add or update animations and transitions"),
    emoji("🗑️", "wastebasket", "Deprecate code that needs to be cleaned up"),
    emoji("🛂", "passport_control", "Work on code related to authorization, roles, and permissions"),
    emoji("🩹", "adhesive_bandage", "Simple fix for a non-critical issue"),
    emoji("🧐", "monocle_face", "Data exploration / inspection"),
    emoji("⚰️", "coffin", "Remove dead code"),
    emoji("🧪", "test_tube", "Add a failing test"),
    emoji("👔", "necktie", "Add or update business logic"),
    emoji("🩺", "stethoscope", "Add or update health check"),
    emoji("🧱", "bricks", "Infrastructure related changes"),
    emoji("🧑‍💻", "technologist", "Improve developer experience"),
    emoji("💸", "money_with_wings", "Add sponsorships or money related infrastructure"),
    emoji("🧵", "thread", "Add or update code related to multithreading or concurrency"),
    emoji("🦺", "safety_vest", "Add or update code related to validation"),
];

/// All emoji, in menu order.
pub fn emojis() -> &'static [Emoji] {
    &EMOJIS
}

/// Look up an emoji by its `:code:` name.
pub fn find_emoji(code: &str) -> Option<Emoji> {
    EMOJIS.iter().find(|e| e.code == code).copied()
}
