use crate::orgchart::domain::{DepartmentRecord, EmployeeRecord};
use crate::ports::outbound::{DirectoryRepository, EmployeeScope};
use crate::shared::error::OrgChartError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

/// HttpDirectoryClient adapter for the HR directory REST API
///
/// This adapter implements the DirectoryRepository port, providing async
/// network access to the directory endpoints with bearer-token auth.
///
/// # Error taxonomy
/// Transport failures, non-success HTTP statuses and undecodable payloads
/// all surface as errors; callers degrade them to empty results per their
/// own policy.
#[derive(Debug)]
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpDirectoryClient {
    const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a new directory client for the given backend.
    ///
    /// # Arguments
    /// * `base_url` - backend origin, e.g. `https://hr.example.com`
    /// * `token` - bearer token attached to every request
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(OrgChartError::InvalidBaseUrl {
                url: base_url,
                reason: "Unsupported scheme".to_string(),
            }
            .into());
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("hr-orgchart/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Validates a value interpolated into a URL path.
    fn validate_path_component(component: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Department code contains path separators which are not allowed");
        }
        if component.contains("..") {
            anyhow::bail!("Department code contains '..' which is not allowed");
        }
        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Department code contains URL-unsafe characters");
        }
        Ok(())
    }

    fn employees_url(&self, base_code: &str, scope: EmployeeScope) -> String {
        let encoded = urlencoding::encode(base_code);
        let variant = if scope.all_departments { "/all" } else { "" };
        format!(
            "{}/api/v1/user/department/{}{}?includeSubDepts={}",
            self.base_url, encoded, variant, scope.include_sub_depts
        )
    }

    fn search_url(&self, term: &str) -> String {
        format!(
            "{}/api/v1/user/search?query={}",
            self.base_url,
            urlencoding::encode(term)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Directory API returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DirectoryRepository for HttpDirectoryClient {
    async fn fetch_departments(&self) -> Result<Vec<DepartmentRecord>> {
        let url = format!("{}/api/v1/user/departments", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_department_names(&self) -> Result<BTreeMap<String, String>> {
        let url = format!("{}/api/v1/departments/names", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_employees(
        &self,
        base_code: &str,
        scope: EmployeeScope,
    ) -> Result<Vec<EmployeeRecord>> {
        Self::validate_path_component(base_code)?;
        let url = self.employees_url(base_code, scope);
        self.get_json(&url).await
    }

    async fn search_employees(&self, term: &str) -> Result<Vec<EmployeeRecord>> {
        self.get_json(&self.search_url(term)).await
    }
}
