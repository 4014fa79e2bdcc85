//! The Instagram v1 operation catalog.
//!
//! Each operation is a constructor returning the [`RequestMetadata`] for one
//! endpoint, plus a matching async method on [`Client`] that sends it and
//! resolves a [`Reply`]. The constructors are what [`Client::send_with`]
//! takes for callback delivery.
//!
//! | Operation | Method | Endpoint |
//! |---|---|---|
//! | [`get_user`] | GET | `users/{user}/` |
//! | [`get_tag`] | GET | `tags/{tag}/` |
//! | [`get_location`] | GET | `locations/{id}/` |
//! | [`recently_liked`] | GET | `users/self/media/liked` |
//! | [`recently_posted`] | GET | `users/{id}/media/recent` |
//! | [`find_users_by_name`] | GET | `users/search` |
//! | [`find_tags_by_name`] | GET | `tags/search` |
//! | [`find_locations_by_geo`] | GET | `locations/search` |
//! | [`posts_by_user`] | GET | `users/{user}/media/recent/` |
//! | [`posts_by_tag`] | GET | `tags/{tag}/media/recent` |
//! | [`posts_by_location_id`] | GET | `locations/{id}/media/recent` |
//! | [`posts_by_geo_location`] | GET | `media/search` |
//! | [`post_by_id`] | GET | `media/{id}` |
//! | [`post_by_shortcode`] | GET | `media/shortcode/{code}` |
//! | [`get_follows`] | GET | `users/self/follows` |
//! | [`get_followers`] | GET | `users/self/followed-by` |
//! | [`get_requested_by`] | GET | `users/self/requested-by` |
//! | [`get_relationship`] | GET | `users/{id}/relationship` |
//! | [`follow`], [`unfollow`], [`approve_request`], [`ignore_request`] | POST | `users/{id}/relationship` |
//! | [`like`] | POST | `media/{id}/likes` |
//! | [`get_likes`] | GET | `media/{id}/likes` |
//! | [`remove_like`] | DELETE | `media/{id}/likes` |
//! | [`comment`] | POST | `media/{id}/comments` |
//! | [`get_comments`] | GET | `media/{id}/comments` |
//! | [`remove_comment`] | DELETE | `media/{id}/comments/{comment}` |

use crate::{
    metadata::RequestMetadata,
    params::{GeoOptions, LikedPage, MediaPage, SearchOptions, TagPage},
    Client, Reply, Result,
};
use http::Method;
use std::fmt;

/// A change to the social graph edge between the token owner and a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipAction {
    Follow,
    Unfollow,
    Approve,
    Ignore,
}

impl RelationshipAction {
    /// The value sent in the `action` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipAction::Follow => "follow",
            RelationshipAction::Unfollow => "unfollow",
            RelationshipAction::Approve => "approve",
            RelationshipAction::Ignore => "ignore",
        }
    }
}

impl fmt::Display for RelationshipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information about a user. `user` is an id or `self`.
pub fn get_user(user: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", user, ""])
}

/// Information about a tag.
pub fn get_tag(tag: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["tags", tag, ""])
}

/// Information about a location.
pub fn get_location(location: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["locations", location, ""])
}

/// Media recently liked by the token owner.
pub fn recently_liked(options: &LikedPage) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", "self", "media", "liked"]).with_params(options)
}

/// Media recently posted by a user. `user` is an id or `self`.
pub fn recently_posted(user: &str, options: &MediaPage) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", user, "media", "recent"]).with_params(options)
}

/// Users whose name matches `name`.
pub fn find_users_by_name(name: &str, options: &SearchOptions) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", "search"])
        .with_params(options)
        .with_param("q", name)
}

/// Tags whose name matches `name`.
pub fn find_tags_by_name(name: &str, options: &SearchOptions) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["tags", "search"])
        .with_params(options)
        .with_param("q", name)
}

/// Locations around a coordinate.
pub fn find_locations_by_geo(lat: f64, lng: f64, options: &GeoOptions) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["locations", "search"])
        .with_params(options)
        .with_param("lat", lat)
        .with_param("lng", lng)
}

/// Media posted by a user.
pub fn posts_by_user(user: &str, options: &MediaPage) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", user, "media", "recent", ""]).with_params(options)
}

/// Media recently tagged with `tag`.
pub fn posts_by_tag(tag: &str, options: &TagPage) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["tags", tag, "media", "recent"]).with_params(options)
}

/// Media recently posted at a location.
pub fn posts_by_location_id(location: &str, options: &MediaPage) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["locations", location, "media", "recent"])
        .with_params(options)
}

/// Media posted around a coordinate.
pub fn posts_by_geo_location(lat: f64, lng: f64, options: &GeoOptions) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["media", "search"])
        .with_params(options)
        .with_param("lat", lat)
        .with_param("lng", lng)
}

/// A single media object by id.
pub fn post_by_id(id: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["media", id])
}

/// A single media object by the shortcode of its public URL.
pub fn post_by_shortcode(shortcode: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["media", "shortcode", shortcode])
}

/// Users the token owner follows.
pub fn get_follows() -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", "self", "follows"])
}

/// Users following the token owner.
pub fn get_followers() -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", "self", "followed-by"])
}

/// Pending follow requests for the token owner.
pub fn get_requested_by() -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", "self", "requested-by"])
}

/// The relationship between the token owner and a user.
pub fn get_relationship(user: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["users", user, "relationship"])
}

/// Changes the relationship with a user.
pub fn relationship(user: &str, action: RelationshipAction) -> RequestMetadata {
    RequestMetadata::new(Method::POST, ["users", user, "relationship"])
        .with_param("action", action)
}

/// Follows a user.
pub fn follow(user: &str) -> RequestMetadata {
    relationship(user, RelationshipAction::Follow)
}

/// Unfollows a user.
pub fn unfollow(user: &str) -> RequestMetadata {
    relationship(user, RelationshipAction::Unfollow)
}

/// Approves a pending follow request from a user.
pub fn approve_request(user: &str) -> RequestMetadata {
    relationship(user, RelationshipAction::Approve)
}

/// Ignores a pending follow request from a user.
pub fn ignore_request(user: &str) -> RequestMetadata {
    relationship(user, RelationshipAction::Ignore)
}

/// Likes a media object as the token owner.
pub fn like(media: &str) -> RequestMetadata {
    RequestMetadata::new(Method::POST, ["media", media, "likes"])
}

/// Users who liked a media object.
pub fn get_likes(media: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["media", media, "likes"])
}

/// Removes the token owner's like from a media object.
pub fn remove_like(media: &str) -> RequestMetadata {
    RequestMetadata::new(Method::DELETE, ["media", media, "likes"])
}

/// Comments on a media object.
pub fn comment(media: &str, text: &str) -> RequestMetadata {
    RequestMetadata::new(Method::POST, ["media", media, "comments"]).with_param("text", text)
}

/// Recent comments on a media object.
pub fn get_comments(media: &str) -> RequestMetadata {
    RequestMetadata::new(Method::GET, ["media", media, "comments"])
}

/// Removes a comment from a media object.
pub fn remove_comment(media: &str, comment: &str) -> RequestMetadata {
    RequestMetadata::new(Method::DELETE, ["media", media, "comments", comment])
}

impl Client {
    /// Information about a user. `user` is an id or `self`.
    pub async fn get_user(&self, user: &str) -> Result<Reply> {
        self.send(get_user(user)).await
    }

    /// Information about a tag.
    pub async fn get_tag(&self, tag: &str) -> Result<Reply> {
        self.send(get_tag(tag)).await
    }

    /// Information about a location.
    pub async fn get_location(&self, location: &str) -> Result<Reply> {
        self.send(get_location(location)).await
    }

    /// Media recently liked by the token owner.
    pub async fn recently_liked(&self, options: LikedPage) -> Result<Reply> {
        self.send(recently_liked(&options)).await
    }

    /// Media recently posted by a user. `user` is an id or `self`.
    pub async fn recently_posted(&self, user: &str, options: MediaPage) -> Result<Reply> {
        self.send(recently_posted(user, &options)).await
    }

    /// Users whose name matches `name`.
    pub async fn find_users_by_name(&self, name: &str, options: SearchOptions) -> Result<Reply> {
        self.send(find_users_by_name(name, &options)).await
    }

    /// Tags whose name matches `name`.
    pub async fn find_tags_by_name(&self, name: &str, options: SearchOptions) -> Result<Reply> {
        self.send(find_tags_by_name(name, &options)).await
    }

    /// Locations around a coordinate.
    pub async fn find_locations_by_geo(
        &self,
        lat: f64,
        lng: f64,
        options: GeoOptions,
    ) -> Result<Reply> {
        self.send(find_locations_by_geo(lat, lng, &options)).await
    }

    /// Media posted by a user.
    pub async fn posts_by_user(&self, user: &str, options: MediaPage) -> Result<Reply> {
        self.send(posts_by_user(user, &options)).await
    }

    /// Media recently tagged with `tag`.
    pub async fn posts_by_tag(&self, tag: &str, options: TagPage) -> Result<Reply> {
        self.send(posts_by_tag(tag, &options)).await
    }

    /// Media recently posted at a location.
    pub async fn posts_by_location_id(&self, location: &str, options: MediaPage) -> Result<Reply> {
        self.send(posts_by_location_id(location, &options)).await
    }

    /// Media posted around a coordinate.
    pub async fn posts_by_geo_location(
        &self,
        lat: f64,
        lng: f64,
        options: GeoOptions,
    ) -> Result<Reply> {
        self.send(posts_by_geo_location(lat, lng, &options)).await
    }

    /// A single media object by id.
    pub async fn post_by_id(&self, id: &str) -> Result<Reply> {
        self.send(post_by_id(id)).await
    }

    /// A single media object by the shortcode of its public URL.
    pub async fn post_by_shortcode(&self, shortcode: &str) -> Result<Reply> {
        self.send(post_by_shortcode(shortcode)).await
    }

    /// Users the token owner follows.
    pub async fn get_follows(&self) -> Result<Reply> {
        self.send(get_follows()).await
    }

    /// Users following the token owner.
    pub async fn get_followers(&self) -> Result<Reply> {
        self.send(get_followers()).await
    }

    /// Pending follow requests for the token owner.
    pub async fn get_requested_by(&self) -> Result<Reply> {
        self.send(get_requested_by()).await
    }

    /// The relationship between the token owner and a user.
    pub async fn get_relationship(&self, user: &str) -> Result<Reply> {
        self.send(get_relationship(user)).await
    }

    /// Follows a user.
    pub async fn follow(&self, user: &str) -> Result<Reply> {
        self.send(follow(user)).await
    }

    /// Unfollows a user.
    pub async fn unfollow(&self, user: &str) -> Result<Reply> {
        self.send(unfollow(user)).await
    }

    /// Approves a pending follow request from a user.
    pub async fn approve_request(&self, user: &str) -> Result<Reply> {
        self.send(approve_request(user)).await
    }

    /// Ignores a pending follow request from a user.
    pub async fn ignore_request(&self, user: &str) -> Result<Reply> {
        self.send(ignore_request(user)).await
    }

    /// Likes a media object as the token owner.
    pub async fn like(&self, media: &str) -> Result<Reply> {
        self.send(like(media)).await
    }

    /// Users who liked a media object.
    pub async fn get_likes(&self, media: &str) -> Result<Reply> {
        self.send(get_likes(media)).await
    }

    /// Removes the token owner's like from a media object.
    pub async fn remove_like(&self, media: &str) -> Result<Reply> {
        self.send(remove_like(media)).await
    }

    /// Comments on a media object.
    pub async fn comment(&self, media: &str, text: &str) -> Result<Reply> {
        self.send(comment(media, text)).await
    }

    /// Recent comments on a media object.
    pub async fn get_comments(&self, media: &str) -> Result<Reply> {
        self.send(get_comments(media)).await
    }

    /// Removes a comment from a media object.
    pub async fn remove_comment(&self, media: &str, comment: &str) -> Result<Reply> {
        self.send(remove_comment(media, comment)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_actions_share_endpoint() {
        let requests = [
            (follow("42"), "follow"),
            (unfollow("42"), "unfollow"),
            (approve_request("42"), "approve"),
            (ignore_request("42"), "ignore"),
        ];

        for (request, action) in &requests {
            assert_eq!(request.method, Method::POST);
            assert_eq!(request.path(), "users/42/relationship");
            assert_eq!(request.params.len(), 1);
            assert_eq!(request.params.get("action"), Some(*action));
        }
    }

    #[test]
    fn test_search_injects_query() {
        let request = find_users_by_name("jack", &SearchOptions::new().count(2));
        assert_eq!(request.path(), "users/search");
        assert_eq!(request.params.get("q"), Some("jack"));
        assert_eq!(request.params.get("count"), Some("2"));

        let request = find_tags_by_name("", &SearchOptions::default());
        assert_eq!(request.path(), "tags/search");
        assert_eq!(request.params.get("q"), Some(""));
    }

    #[test]
    fn test_geo_operations() {
        let request = posts_by_geo_location(0.0, -0.5, &GeoOptions::new().distance(1000));
        assert_eq!(request.path(), "media/search");
        assert_eq!(request.params.get("lat"), Some("0"));
        assert_eq!(request.params.get("lng"), Some("-0.5"));
        assert_eq!(request.params.get("distance"), Some("1000"));
    }

    #[test]
    fn test_comment_operations() {
        let request = comment("555", "nice");
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "media/555/comments");
        assert_eq!(request.params.get("text"), Some("nice"));

        let request = remove_comment("555", "777");
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path(), "media/555/comments/777");
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_like_operations() {
        assert_eq!(like("9").method, Method::POST);
        assert_eq!(get_likes("9").method, Method::GET);
        assert_eq!(remove_like("9").method, Method::DELETE);
        assert_eq!(remove_like("9").path(), "media/9/likes");
    }

    #[test]
    fn test_paths_with_trailing_slash() {
        assert_eq!(get_user("self").path(), "users/self/");
        assert_eq!(get_tag("nofilter").path(), "tags/nofilter/");
        assert_eq!(get_location("1").path(), "locations/1/");
        assert_eq!(
            posts_by_user("self", &MediaPage::default()).path(),
            "users/self/media/recent/"
        );
        assert_eq!(
            recently_posted("self", &MediaPage::default()).path(),
            "users/self/media/recent"
        );
    }

    #[test]
    fn test_follow_graph_reads() {
        assert_eq!(get_follows().path(), "users/self/follows");
        assert_eq!(get_followers().path(), "users/self/followed-by");
        assert_eq!(get_requested_by().path(), "users/self/requested-by");
        assert_eq!(get_relationship("7").path(), "users/7/relationship");
        assert_eq!(post_by_shortcode("D").path(), "media/shortcode/D");
        assert_eq!(post_by_id("3").path(), "media/3");
    }
}
