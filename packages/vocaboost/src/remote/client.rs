//! 基于 reqwest 的远端词汇服务客户端

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::{CreateWordRequest, CreateWordResponse, PracticeQuestion, ServiceStatus, Word};
use crate::remote::{RemoteError, RemoteResult, WordService};

/// HTTP 客户端
///
/// 基础地址是固定配置，请求不带超时。
#[derive(Debug, Clone)]
pub struct HttpWordService {
    client: Client,
    base_url: String,
}

impl HttpWordService {
    /// 创建客户端
    pub fn new(base_url: impl Into<String>) -> RemoteResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| RemoteError::Network(format!("创建 HTTP 客户端失败: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// 使用已有的 reqwest 客户端
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`，返回服务状态文本
    pub async fn ping(&self) -> RemoteResult<String> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .map_err(network_error)?;

        let status: ServiceStatus = decode(response).await?;
        Ok(status.status)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RemoteResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(network_error)?;

        decode(response).await
    }
}

#[async_trait]
impl WordService for HttpWordService {
    async fn create_word(&self, word: &Word) -> RemoteResult<Word> {
        let response = self
            .client
            .post(self.url("/words"))
            .json(&CreateWordRequest::from(word))
            .send()
            .await
            .map_err(network_error)?;

        match decode::<CreateWordResponse>(response).await? {
            CreateWordResponse::Created(created) => Ok(created),
            CreateWordResponse::Acknowledged { message } => {
                tracing::debug!(%message, "create acknowledged without word body");
                Ok(word.without_id())
            }
        }
    }

    async fn list_words(&self) -> RemoteResult<Vec<Word>> {
        self.get_json("/words").await
    }

    async fn list_practice_questions(&self) -> RemoteResult<Vec<PracticeQuestion>> {
        let questions: Vec<PracticeQuestion> = self.get_json("/practice").await?;

        if let Some(bad) = questions.iter().find(|q| !q.is_well_formed()) {
            return Err(RemoteError::Decode(format!(
                "练习题 \"{}\" 的答案不在选项中或选项少于两个",
                bad.word
            )));
        }

        Ok(questions)
    }
}

fn network_error(err: reqwest::Error) -> RemoteError {
    RemoteError::Network(err.to_string())
}

/// 检查状态码并解析 JSON 响应体
async fn decode<T: DeserializeOwned>(response: Response) -> RemoteResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if !status.is_success() {
        return Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
}
