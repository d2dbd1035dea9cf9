use super::http::{self, RemoteService};
use crate::models::{ApiResponse, CompanyRecord, CompanySummary};
use crate::types::{ClientError, ClientResult};
use reqwest::Method;
use tracing::info;

/// Company directory endpoints
#[derive(Debug, Clone)]
pub struct CompanyClient {
    service: RemoteService,
}

impl CompanyClient {
    pub fn new(service: RemoteService) -> Self {
        Self { service }
    }

    /// Companies grouped by name, first-seen order
    pub async fn list_companies(&self) -> ClientResult<ApiResponse<Vec<CompanySummary>>> {
        let response = http::send(self.service.request(Method::GET, "/companies")).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(http::status_error(status));
        }

        let records: Vec<CompanyRecord> = http::decode(response).await?;
        let companies = group_companies(&records);
        info!(count = companies.len(), "Companies fetched");
        let total = companies.len();
        Ok(ApiResponse::ok(companies, "Companies retrieved successfully").with_total(total))
    }

    pub async fn company_details(&self, name: &str) -> ClientResult<ApiResponse<serde_json::Value>> {
        if name.trim().is_empty() {
            return Err(ClientError::InvalidRequest("company name must not be empty".to_string()));
        }

        let url = self.service.segment_url("/companies/details", name)?;
        let response = http::send(self.service.request_url(Method::GET, url)).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(http::status_error(status));
        }

        let details = http::decode(response).await?;
        Ok(ApiResponse::ok(details, "Company details retrieved successfully"))
    }
}

fn group_companies(records: &[CompanyRecord]) -> Vec<CompanySummary> {
    let mut out: Vec<CompanySummary> = Vec::new();
    for record in records {
        match out.iter_mut().find(|c| c.name == record.name) {
            Some(existing) => existing.job_count += 1,
            None => out.push(CompanySummary {
                name: record.name.clone(),
                location: record
                    .location
                    .clone()
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| "Unknown".to_string()),
                job_count: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn group_companies_counts_and_defaults_location() {
        let records = vec![
            CompanyRecord { name: "Acme".into(), location: None },
            CompanyRecord { name: "Initech".into(), location: Some("Pune".into()) },
            CompanyRecord { name: "Acme".into(), location: Some("Remote".into()) },
        ];
        let grouped = group_companies(&records);
        assert_eq!(
            grouped,
            vec![
                CompanySummary { name: "Acme".into(), location: "Unknown".into(), job_count: 2 },
                CompanySummary { name: "Initech".into(), location: "Pune".into(), job_count: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn test_company_details_escapes_name() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/companies/details/Design%20Studio")
            .with_status(200)
            .with_body(r#"{"name":"Design Studio","jobs":3}"#)
            .create_async()
            .await;

        let client = CompanyClient::new(RemoteService::new(format!("{}/api", server.url())));
        let details = client.company_details("Design Studio").await.unwrap();
        mock.assert_async().await;
        assert_eq!(details.data.unwrap()["jobs"], 3);
    }
}
