use serde::Deserialize;

/// Projection of `GET /users/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResult {
    #[allow(dead_code)]
    pub id: u64,
    pub login: String,
    pub public_repos: u32,
    pub name: Option<String>,
}

impl UserResult {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

/// Projection of `GET /repos/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoResult {
    pub name: String,
    pub full_name: Option<String>,
    pub stargazers_count: u32,
}

impl RepoResult {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Body GitHub sends alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
