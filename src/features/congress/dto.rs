use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FetchCongressQuery {
    pub state: Option<String>,
}
