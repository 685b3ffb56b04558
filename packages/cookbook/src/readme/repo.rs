//! GitHub repository references parsed from source links.

use url::Url;

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `https://github.com/{owner}/{repo}[/...]`.
    ///
    /// Returns `None` for other hosts or when owner/repo are missing. Deeper
    /// paths (`/tree/main/app`) resolve to the repository itself.
    pub fn parse(repo_url: &str) -> Option<Self> {
        let url = Url::parse(repo_url.trim()).ok()?;
        match url.host_str()? {
            "github.com" | "www.github.com" => {}
            _ => return None,
        }

        let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let repo = segments.next()?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return None;
        }

        Some(Self::new(owner, repo))
    }

    /// Raw file URL on `raw_host`.
    pub fn raw_url(&self, raw_host: &str, branch: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            raw_host.trim_end_matches('/'),
            self.owner,
            self.repo,
            branch,
            filename
        )
    }

    /// Base for resolving relative links found in the readme.
    pub fn blob_base(&self, branch: &str) -> String {
        format!("https://github.com/{}/{}/blob/{}/", self.owner, self.repo, branch)
    }
}
