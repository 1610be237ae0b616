// Session gate
//
// Process-wide role derived from a static credential match against the
// configured admin and staff pairs. Client-trust model: there is no
// server-side identity, no expiry, and no hashing; the product runs on a
// private network for a single venue team.

use parking_lot::RwLock;

use bellavue_core::Role;

/// One username/password pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub struct SessionService {
    admin: Credentials,
    staff: Credentials,
    role: RwLock<Role>,
}

impl SessionService {
    pub fn new(admin: Credentials, staff: Credentials) -> Self {
        Self {
            admin,
            staff,
            role: RwLock::new(Role::None),
        }
    }

    /// Match the credentials and set the session role. Usernames compare
    /// case-insensitively, passwords exactly; both sides are trimmed.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let username = username.trim().to_lowercase();
        let password = password.trim();

        let matched = if username == self.admin.username.to_lowercase()
            && password == self.admin.password
        {
            Some(Role::Admin)
        } else if username == self.staff.username.to_lowercase()
            && password == self.staff.password
        {
            Some(Role::Staff)
        } else {
            None
        };

        match matched {
            Some(role) => {
                *self.role.write() = role;
                true
            }
            None => false,
        }
    }

    pub fn logout(&self) {
        *self.role.write() = Role::None;
    }

    pub fn role(&self) -> Role {
        *self.role.read()
    }
}
