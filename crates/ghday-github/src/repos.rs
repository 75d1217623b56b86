//! Repository enumeration (`GET /users/{user}/repos`).

use ghday_activity::RepoRef;

use crate::{
    GitHubClient,
    error::GitHubError,
    http::{check_response, decode_json},
};

#[derive(serde::Deserialize)]
struct Repository {
    name: String,
    owner: Owner,
}

#[derive(serde::Deserialize)]
struct Owner {
    login: String,
}

pub(crate) fn repos_url(base: &str, user: &str, per_page: u32) -> String {
    format!(
        "{base}/users/{}/repos?per_page={per_page}",
        urlencoding::encode(user)
    )
}

impl GitHubClient {
    /// List the first page of `user`'s repositories.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::NotFound`] for an unknown user, or another
    /// [`GitHubError`] if the request fails or the response cannot be parsed.
    pub async fn fetch_repositories(&self, user: &str) -> Result<Vec<RepoRef>, GitHubError> {
        let url = repos_url(&self.base_url, user, self.per_page);
        let resp = check_response(self.get(&url).send().await?).await?;

        let repos: Vec<Repository> = decode_json(resp).await?;
        Ok(repos
            .into_iter()
            .map(|r| RepoRef::new(r.owner.login, r.name))
            .collect())
    }
}
