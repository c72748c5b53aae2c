use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Method};
use crate::post::{FeedData, Post};

/// Wire shape of a user resource. All three fields are required; a payload
/// missing any of them is a backend contract violation and fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
}

impl UserData {
    /// Promote embedded user data (e.g. a post's author) to a full [`User`]
    /// bound to `client`.
    pub fn into_user(self, client: &ApiClient) -> User {
        User::from_data(client.clone(), self)
    }
}

/// The mutable profile fields — the only state `save` sends back. `id` is
/// assigned by the server and lives in the resource path, never the payload.
#[derive(Debug, Serialize)]
struct Profile<'a> {
    name: &'a str,
    #[serde(rename = "avatarURL")]
    avatar_url: &'a str,
}

#[derive(Deserialize)]
struct Directory {
    users: Vec<String>,
}

#[derive(Serialize)]
struct NewUser<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct NewPost<'a> {
    text: &'a str,
}

/// A user of the app: a local, possibly stale mirror of server state.
///
/// `id` is fixed at load time; `name` and `avatar_url` may be edited and
/// persisted with [`User::save`]. Instances share nothing — every load
/// produces a fresh object, and two instances are equal iff their ids are.
#[derive(Debug, Clone)]
pub struct User {
    client: ApiClient,
    id: String,
    pub name: String,
    pub avatar_url: String,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

/// The string representation of a user is their display name.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl User {
    /// The ids in the user directory, in server order.
    pub async fn list_users(client: &ApiClient) -> Result<Vec<String>, ApiError> {
        let directory: Directory = client.request(Method::GET, "/users", None::<&()>).await?;
        Ok(directory.users)
    }

    /// Load the user with the given id, creating it on first access.
    ///
    /// Only a 404 triggers creation; any other failure propagates unchanged.
    /// The create request names the id and lets the server assign the
    /// default profile, so two sequential calls yield the same identity.
    pub async fn load_or_create(client: &ApiClient, id: &str) -> Result<User, ApiError> {
        let path = format!("/users/{id}");
        match client.request::<UserData, ()>(Method::GET, &path, None).await {
            Ok(data) => Ok(User::from_data(client.clone(), data)),
            Err(err) if err.is_not_found() => {
                let data: UserData = client
                    .request(Method::POST, "/users", Some(&NewUser { id }))
                    .await?;
                Ok(User::from_data(client.clone(), data))
            }
            Err(err) => Err(err),
        }
    }

    /// Rebuild a user from raw server data.
    pub fn from_data(client: ApiClient, data: UserData) -> Self {
        Self {
            client,
            id: data.id,
            name: data.name,
            avatar_url: data.avatar_url,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn profile(&self) -> Profile<'_> {
        Profile {
            name: &self.name,
            avatar_url: &self.avatar_url,
        }
    }

    /// Persist the current `name` and `avatar_url`, then refresh both from
    /// the server's reply.
    pub async fn save(&mut self) -> Result<(), ApiError> {
        let path = format!("/users/{}", self.id);
        let data: UserData = self
            .client
            .request(Method::PUT, &path, Some(&self.profile()))
            .await?;
        self.name = data.name;
        self.avatar_url = data.avatar_url;
        Ok(())
    }

    /// The user's current feed, in server order.
    pub async fn feed(&self) -> Result<Vec<Post>, ApiError> {
        let path = format!("/users/{}/feed", self.id);
        let feed: FeedData = self.client.request(Method::GET, &path, None::<&()>).await?;
        Ok(feed.posts)
    }

    /// Publish a new post with the given text under this user's identity.
    pub async fn make_post(&self, text: &str) -> Result<Post, ApiError> {
        let path = format!("/users/{}/posts", self.id);
        self.client
            .request(Method::POST, &path, Some(&NewPost { text }))
            .await
    }

    /// Start following the given user id. Any error from the API passes
    /// through untouched.
    pub async fn add_follow(&self, target: &str) -> Result<(), ApiError> {
        let path = format!("/users/{}/follows/{target}", self.id);
        self.client
            .request::<serde_json::Value, ()>(Method::PUT, &path, None)
            .await?;
        Ok(())
    }

    /// Stop following the given user id. Any error from the API passes
    /// through untouched.
    pub async fn delete_follow(&self, target: &str) -> Result<(), ApiError> {
        let path = format!("/users/{}/follows/{target}", self.id);
        self.client
            .request::<serde_json::Value, ()>(Method::DELETE, &path, None)
            .await?;
        Ok(())
    }
}
