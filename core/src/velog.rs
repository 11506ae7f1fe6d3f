use serde_json::Value;

/// Digs the publish confirmation out of the backend's `velogResponse` blob
/// and builds the public post URL. The confirmation is the GraphQL
/// `writePost` payload: `data.writePost.{id, user.username, url_slug}`.
pub fn post_url(velog_response: &Value) -> Option<String> {
    let write_post = velog_response.get("data")?.get("writePost")?;
    let username = write_post.get("user")?.get("username")?.as_str()?;
    let url_slug = write_post.get("url_slug")?.as_str()?;
    Some(format!("https://velog.io/@{}/{}", username, url_slug))
}

pub fn post_id(velog_response: &Value) -> Option<&str> {
    velog_response
        .get("data")?
        .get("writePost")?
        .get("id")?
        .as_str()
}
