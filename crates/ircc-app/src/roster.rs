//! Users in the current channel.
//!
//! The roster is replaced wholesale from each names reply. Between replies it
//! follows JOIN, PART, QUIT and NICK events for other users so the pane does
//! not go stale.

/// Channel membership prefixes stripped from names replies.
const MODE_PREFIXES: [char; 5] = ['~', '&', '@', '%', '+'];

/// Index into the roster palette. The terminal layer maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserColor(pub u8);

impl UserColor {
    /// Number of distinct roster colors.
    pub const PALETTE_SIZE: u8 = 6;

    /// Stable color for a nickname, so a user keeps their color across
    /// roster rebuilds.
    pub fn for_name(name: &str) -> Self {
        // FNV-1a
        let hash = name
            .bytes()
            .fold(0x811c_9dc5_u32, |hash, b| (hash ^ u32::from(b)).wrapping_mul(0x0100_0193));
        Self((hash % u32::from(Self::PALETTE_SIZE)) as u8)
    }
}

/// One channel member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Nickname without mode prefix.
    pub name: String,
    /// Channel mode prefix (`@` operator, `+` voice, ...).
    pub prefix: Option<char>,
    /// Display color.
    pub color: UserColor,
}

impl User {
    fn new(name: &str, prefix: Option<char>) -> Self {
        Self { name: name.to_owned(), prefix, color: UserColor::for_name(name) }
    }
}

/// Ordered set of channel members. Names are unique.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all users from a space-separated names list.
    pub fn replace_from_names(&mut self, names: &str) {
        self.users.clear();
        for entry in names.split_whitespace() {
            let (prefix, name) = match entry.strip_prefix(MODE_PREFIXES) {
                Some(name) => (entry.chars().next(), name),
                None => (None, entry),
            };
            if !name.is_empty() && !self.contains(name) {
                self.users.push(User::new(name, prefix));
            }
        }
    }

    /// Add a user. Returns `false` if already present.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.users.push(User::new(name, None));
        true
    }

    /// Remove a user. Returns `false` if absent.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.name != name);
        self.users.len() != before
    }

    /// Rename a user, keeping their position and prefix.
    ///
    /// Returns `false` if `old` is absent or `new` is already taken.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if self.contains(new) {
            return false;
        }
        match self.users.iter_mut().find(|u| u.name == old) {
            Some(user) => {
                user.name = new.to_owned();
                user.color = UserColor::for_name(new);
                true
            },
            None => false,
        }
    }

    /// Remove all users.
    pub fn clear(&mut self) {
        self.users.clear();
    }

    /// User with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.users.iter().any(|u| u.name == name)
    }

    /// Users in display order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Roster is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
