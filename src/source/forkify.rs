use super::RecipeSource;
use crate::error::BrowserError;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;
use html_escape::decode_html_entities;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Client for the forkify recipe API
pub struct ForkifyClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<WireSummary>,
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    recipe: WireRecipe,
}

#[derive(Debug, Deserialize)]
struct WireRecipe {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl ForkifyClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BrowserError> {
        let mut builder = Client::builder().user_agent("recipe-browser/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url: String = base_url.into();
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BrowserError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BrowserError::Api(format!("{} returned {}", url, status)));
        }

        let value: Value = serde_json::from_str(&body)?;

        // The API reports "no results" and bad ids as a 200 with an error field
        if let Some(error) = value.get("error") {
            let message = error.as_str().unwrap_or("Unknown error");
            return Err(BrowserError::Api(message.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn decode_text(text: &str) -> String {
    decode_html_entities(text).trim().to_string()
}

#[async_trait]
impl RecipeSource for ForkifyClient {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, BrowserError> {
        let response: SearchResponse = self.get_json("search", &[("q", query)]).await?;
        debug!("Search '{}' returned {} recipes", query, response.recipes.len());

        Ok(response
            .recipes
            .into_iter()
            .map(|r| RecipeSummary {
                id: r.recipe_id,
                title: decode_text(&r.title),
                author: decode_text(&r.publisher),
                image_url: r.image_url,
            })
            .collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RecipeDetail, BrowserError> {
        let response: GetResponse = self.get_json("get", &[("rId", id)]).await?;
        let recipe = response.recipe;
        debug!(
            "Fetched recipe {} with {} ingredient lines",
            recipe.recipe_id,
            recipe.ingredients.len()
        );

        Ok(RecipeDetail {
            id: recipe.recipe_id,
            title: decode_text(&recipe.title),
            author: decode_text(&recipe.publisher),
            image_url: recipe.image_url,
            source_url: recipe.source_url,
            ingredients: recipe.ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search_maps_summaries() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "pizza".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "count": 2,
                    "recipes": [
                        {"publisher": "Closet Cooking", "title": "Pizza Dip &amp; Chips", "recipe_id": "35477", "image_url": "http://img/1.jpg", "social_rank": 99.9},
                        {"publisher": "101 Cookbooks", "title": "Best Pizza Dough Ever", "recipe_id": "47746", "image_url": "http://img/2.jpg"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = ForkifyClient::new(server.url(), None).unwrap();
        let results = client.search("pizza").await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "35477");
        assert_eq!(results[0].title, "Pizza Dip & Chips");
        assert_eq!(results[0].author, "Closet Cooking");
        assert_eq!(results[1].image_url, "http://img/2.jpg");
    }

    #[tokio::test]
    async fn test_error_body_is_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"error": "Couldn't find recipe with that query"}"#)
            .create_async()
            .await;

        let client = ForkifyClient::new(server.url(), None).unwrap();
        let result = client.search("nothing").await;

        assert!(matches!(result, Err(BrowserError::Api(msg)) if msg.contains("Couldn't find")));
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let client = ForkifyClient::new(server.url(), None).unwrap();
        let result = client.fetch_by_id("1").await;

        assert!(matches!(result, Err(BrowserError::Api(_))));
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = ForkifyClient::new(format!("{}/", server.url()), None).unwrap();
        let result = client.fetch_by_id("1").await;

        assert!(matches!(result, Err(BrowserError::Decode(_))));
    }
}
