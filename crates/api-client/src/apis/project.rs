//! 项目接口
//!
//! 负责调用后端 `/prj/list`

use crate::apis::traits::ProjectApiTrait;
use crate::connection::decode_data;
use crate::policy::ErrorPolicy;
use crate::{ApiClient, ApiResult};
use shared_lib::{PrjDto, PrjReqDto};

/// 项目列表接口路径
pub const PRJ_LIST_PATH: &str = "/prj/list";

impl ApiClient {
    async fn fetch_prj_list(&self, params: Option<&PrjReqDto>) -> ApiResult<Vec<PrjDto>> {
        let envelope = self.get_envelope(PRJ_LIST_PATH, params).await?;
        decode_data(envelope.data)
    }
}

#[async_trait::async_trait]
impl ProjectApiTrait for ApiClient {
    async fn get_prj_list(&self, params: Option<&PrjReqDto>) -> ApiResult<Vec<PrjDto>> {
        self.fetch_prj_list(params).await.propagate("项目列表")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn query_pairs(server: &MockServer) -> Vec<(String, String)> {
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let mut pairs: Vec<(String, String)> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.sort();
        pairs
    }

    #[tokio::test]
    async fn test_get_prj_list_returns_data() {
        let server = MockServer::start().await;
        let data = json!([
            { "rowNum": "1", "prjId": "P001", "prjNm": "项目A", "prjGbn": "10", "prjGbnNm": "SI", "prjStsCd": "20" },
            { "rowNum": "2", "prjId": "P002", "prjNm": "项目B" }
        ]);
        Mock::given(method("GET"))
            .and(path("/api/prj/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": data.clone(),
                "error": null
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri()));
        let projects = client.get_prj_list(None).await.unwrap();

        let expected: Vec<PrjDto> = serde_json::from_value(data.clone()).unwrap();
        assert_eq!(projects, expected);
        assert_eq!(serde_json::to_value(&projects).unwrap(), data);
    }

    #[tokio::test]
    async fn test_get_prj_list_accepts_numeric_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prj/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [{ "prjId": 101 }] })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri()));
        let projects = client.get_prj_list(None).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].prj_id, "101");
    }

    #[tokio::test]
    async fn test_get_prj_list_sends_only_present_criteria() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prj/list"))
            .and(query_param("prjNm", "项目A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri()));
        let params = PrjReqDto {
            prj_nm: Some("项目A".to_string()),
            prj_sts_cd: Some("".to_string()),
            ..Default::default()
        };
        let projects = client.get_prj_list(Some(&params)).await.unwrap();
        assert!(projects.is_empty());

        assert_eq!(
            query_pairs(&server).await,
            vec![
                ("prjNm".to_string(), "项目A".to_string()),
                ("prjStsCd".to_string(), "".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_prj_list_without_criteria_sends_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prj/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri()));
        client.get_prj_list(Some(&PrjReqDto::default())).await.unwrap();
        assert!(query_pairs(&server).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_prj_list_propagates_transport_failure() {
        // 端口 1 上没有服务，连接会被直接拒绝
        let client = ApiClient::new("http://127.0.0.1:1/api");
        let result = client.get_prj_list(None).await;
        assert!(matches!(result, Err(ApiError::Request(_))));
    }

    #[tokio::test]
    async fn test_get_prj_list_propagates_malformed_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prj/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": "not-an-array" })))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri()));
        let result = client.get_prj_list(None).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_prj_list_propagates_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prj/list"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri()));
        let result = client.get_prj_list(None).await;
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }
}
