use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::user::UserData;

/// A single feed entry: author, publication time, text.
///
/// Built entirely from data already fetched by `User::feed` or
/// `User::make_post`; immutable, and never sent back to the server as an
/// object. The embedded author is profile data only, not a full `User`
/// handle — promote it with `UserData::into_user` when needed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub user: UserData,
    pub time: DateTime<Utc>,
    pub text: String,
}

/// Feed envelope, `{ "posts": [...] }` in server order.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedData {
    pub posts: Vec<Post>,
}
