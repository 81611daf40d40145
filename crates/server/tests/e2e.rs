use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ClientBlog {
    id: Option<Uuid>,
    text: Option<String>,
    created_date: String,
    updated_date: String,
    author: Option<String>,
}

impl ClientBlog {
    fn new(author: &str, text: Option<&str>) -> Self {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true);
        Self {
            id: None,
            text: text.map(str::to_string),
            created_date: now.clone(),
            updated_date: now,
            author: Some(author.to_string()),
        }
    }
}

/// Response shape as the server encodes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerBlog {
    id: Option<Uuid>,
    text: String,
    author: Option<String>,
    created_date: chrono::DateTime<chrono::Utc>,
    updated_date: chrono::DateTime<chrono::Utc>,
}

struct TestApp {
    base_url: String,
    client: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = oneshot::channel::<()>();
    let app = server::startup::build_app();
    tokio::spawn(async move {
        let shutdown = async move {
            let _ = rx.await;
        };
        if let Err(e) = server::serve(listener, app, shutdown).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new(), _shutdown: tx })
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create_blog(&self, blog: &ClientBlog) -> anyhow::Result<(Uuid, HttpStatusCode)> {
        let res = self.client.post(self.url("/api/Blog")).json(blog).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Ok((Uuid::nil(), status));
        }
        Ok((res.json::<Uuid>().await?, status))
    }

    async fn get_blog(&self, id: &str) -> anyhow::Result<(Option<ServerBlog>, HttpStatusCode)> {
        let res = self.client.get(self.url(&format!("/api/Blog/{id}"))).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Ok((None, status));
        }
        Ok((Some(res.json::<ServerBlog>().await?), status))
    }
}

fn same_blog(sent: &ClientBlog, got: &ServerBlog) -> bool {
    let parse = |s: &str| chrono::DateTime::parse_from_rfc3339(s).map(|d| d.with_timezone(&chrono::Utc)).ok();
    sent.author == got.author
        && sent.text.as_deref() == Some(got.text.as_str())
        && parse(&sent.created_date) == Some(got.created_date)
        && parse(&sent.updated_date) == Some(got.updated_date)
}

#[tokio::test]
async fn e2e_create_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let long_author = "waroifjaorilszrj fao;sirhcmgao;sizrjgmaxozirjga;o,xrizjgvoiszrjlvalizrjvlzisrjmvlzirjvz;lixrjvmz;lirjvmzl;z";
    for author in ["author1", "12312!WDw;,q", long_author] {
        let (id, status) = app.create_blog(&ClientBlog::new(author, Some("text1"))).await?;
        assert_eq!(status, HttpStatusCode::OK);
        assert!(!id.is_nil());
    }
    Ok(())
}

#[tokio::test]
async fn e2e_create_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, status) = app.create_blog(&ClientBlog::new("test", None)).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_update_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (id, _) = app.create_blog(&ClientBlog::new("author1", Some("text 1"))).await?;

    let mut update = ClientBlog::new("author1", Some("text 2"));
    update.id = Some(id);
    let res = app.client.put(app.url("/api/Blog")).json(&update).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let (fetched, _) = app.get_blog(&id.to_string()).await?;
    assert_eq!(fetched.map(|b| b.text), Some("text 2".to_string()));
    Ok(())
}

#[tokio::test]
async fn e2e_update_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut blog = ClientBlog::new("author1", Some("text 1"));
    let (id, _) = app.create_blog(&blog).await?;

    blog.text = Some(String::new());
    blog.id = Some(id);
    let res = app.client.put(app.url("/api/Blog")).json(&blog).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let (fetched, _) = app.get_blog(&id.to_string()).await?;
    assert_eq!(fetched.map(|b| b.text), Some("text 1".to_string()));
    Ok(())
}

#[tokio::test]
async fn e2e_update_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut blog = ClientBlog::new("author1", Some("text 1"));
    blog.id = Some(Uuid::nil());
    let res = app.client.put(app.url("/api/Blog")).json(&blog).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (id, _) = app.create_blog(&ClientBlog::new("author1", Some("text 1"))).await?;

    let res = app.client.delete(app.url(&format!("/api/Blog/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let (fetched, status) = app.get_blog(&id.to_string()).await?;
    assert!(fetched.is_none());
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.delete(app.url("/api/Blog/erbe")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.delete(app.url(&format!("/api/Blog/{}", Uuid::new_v4()))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_get_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let blog = ClientBlog::new("author1", Some("text 1"));
    let (id, _) = app.create_blog(&blog).await?;

    let (fetched, status) = app.get_blog(&id.to_string()).await?;
    assert_eq!(status, HttpStatusCode::OK);
    let fetched = fetched.expect("blog present");
    assert_eq!(fetched.id, Some(id));
    assert!(same_blog(&blog, &fetched));
    Ok(())
}

#[tokio::test]
async fn e2e_get_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, status) = app.get_blog("reg").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_get_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, status) = app.get_blog(&Uuid::new_v4().to_string()).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    Ok(())
}
