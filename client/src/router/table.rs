//! Declarative route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos `<Routes>` tree in `app.rs` renders views; this table carries
//! the navigation metadata (auth requirements, redirects) the guard needs.
//! Both must list the same paths; the host crate's route tests compare them.
//!
//! DESIGN
//! ======
//! Records nest like the view tree. Child paths are relative to their parent,
//! and `requires_auth` accumulates down the matched chain.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Redirect target for unknown paths and for the `/` index.
pub const PROFILE_PATH: &str = "/profile";
/// Redirect target for protected routes while logged out.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Login,
    Register,
    Home,
    ProfileDefault,
    Profile,
    Accounts,
    AccountCreate,
    Transfers,
    NotFound,
}

/// Per-record navigation metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only reachable when logged in. Inherited by children.
    pub requires_auth: bool,
    /// Only reachable when logged out.
    pub public_only: bool,
}

#[derive(Debug)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: RouteName,
    pub meta: RouteMeta,
    pub redirect: Option<&'static str>,
    pub children: &'static [RouteRecord],
}

const PUBLIC_ONLY: RouteMeta = RouteMeta { requires_auth: false, public_only: true };
const REQUIRES_AUTH: RouteMeta = RouteMeta { requires_auth: true, public_only: false };
const INHERIT: RouteMeta = RouteMeta { requires_auth: false, public_only: false };

const fn leaf(path: &'static str, name: RouteName, meta: RouteMeta) -> RouteRecord {
    RouteRecord { path, name, meta, redirect: None, children: &[] }
}

pub static ROUTES: &[RouteRecord] = &[
    leaf("/login", RouteName::Login, PUBLIC_ONLY),
    leaf("/register", RouteName::Register, PUBLIC_ONLY),
    RouteRecord {
        path: "/",
        name: RouteName::Home,
        meta: REQUIRES_AUTH,
        redirect: None,
        children: &[
            RouteRecord {
                path: "",
                name: RouteName::ProfileDefault,
                meta: INHERIT,
                redirect: Some(PROFILE_PATH),
                children: &[],
            },
            leaf("profile", RouteName::Profile, INHERIT),
            leaf("accounts", RouteName::Accounts, INHERIT),
            leaf("accounts/create", RouteName::AccountCreate, INHERIT),
            leaf("transfers", RouteName::Transfers, INHERIT),
        ],
    },
];

/// Result of matching a path against [`ROUTES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    /// Normalized path that was matched.
    pub path: String,
    /// Outermost-first chain of matched records. Empty for unknown paths.
    pub matched: Vec<&'static RouteRecord>,
}

impl PartialEq for RouteRecord {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for RouteRecord {}

impl RouteMatch {
    pub fn name(&self) -> RouteName {
        self.matched.last().map_or(RouteName::NotFound, |r| r.name)
    }

    /// Any record in the matched chain requires auth.
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|r| r.meta.requires_auth)
    }

    /// The target record itself is public-only.
    pub fn is_public_only(&self) -> bool {
        self.matched.last().is_some_and(|r| r.meta.public_only)
    }

    /// Where the table itself sends this path, before any guard runs.
    pub fn redirect(&self) -> Option<&'static str> {
        match self.matched.last() {
            Some(record) => record.redirect,
            None => Some(PROFILE_PATH),
        }
    }
}

/// Strip query/fragment and trailing slashes; always starts with `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}

fn join(base: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_owned();
    }
    if child.is_empty() {
        return base.to_owned();
    }
    format!("{}/{child}", base.trim_end_matches('/'))
}

fn find(records: &'static [RouteRecord], base: &str, target: &str) -> Option<Vec<&'static RouteRecord>> {
    for record in records {
        let full = join(base, record.path);
        if let Some(mut chain) = find(record.children, &full, target) {
            chain.insert(0, record);
            return Some(chain);
        }
        if full == target {
            return Some(vec![record]);
        }
    }
    None
}

/// Match `path` against the table.
pub fn resolve(path: &str) -> RouteMatch {
    let path = normalize_path(path);
    let matched = find(ROUTES, "/", &path).unwrap_or_default();
    RouteMatch { path, matched }
}

/// Every concrete path the table can render, in declaration order.
pub fn route_paths() -> Vec<String> {
    fn walk(records: &'static [RouteRecord], base: &str, out: &mut Vec<String>) {
        for record in records {
            let full = join(base, record.path);
            if record.redirect.is_none() && record.children.is_empty() {
                out.push(full.clone());
            }
            walk(record.children, &full, out);
        }
    }
    let mut out = Vec::new();
    walk(ROUTES, "/", &mut out);
    out
}
