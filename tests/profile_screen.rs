use practice_lessons::{
    Avatar, FetchConfig, FetchErrorKind, Profile, ProfileFetcher, ProfileScreen,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn fetcher_for(endpoint: String) -> ProfileFetcher {
    ProfileFetcher::new(&FetchConfig {
        endpoint,
        ..FetchConfig::default()
    })
    .unwrap()
}

fn body(login: &str, bio: &str) -> String {
    serde_json::json!({
        "login": login,
        "avatar_url": format!("https://avatars.example/{login}.png"),
        "bio": bio,
        "followers": 10,
    })
    .to_string()
}

#[tokio::test]
async fn test_load_publishes_to_subscribers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body("octocat", "hi")))
        .mount(&server)
        .await;

    let screen = ProfileScreen::new();
    let mut rx = screen.subscribe();
    assert!(rx.borrow().is_none());

    let fetcher = fetcher_for(format!("{}/users/octocat", server.uri()));
    screen.load(&fetcher).await.unwrap();

    assert!(rx.has_changed().unwrap());
    let published = rx.borrow_and_update().clone().unwrap();
    assert_eq!(published.handle, "octocat");

    let card = screen.render();
    assert_eq!(card.handle, "octocat");
    assert_eq!(card.bio, "hi");
    assert!(matches!(card.avatar, Avatar::Image(_)));
}

#[tokio::test]
async fn test_failed_load_keeps_previous_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body("octocat", "hi")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let screen = ProfileScreen::new();
    screen
        .load(&fetcher_for(format!("{}/users/octocat", server.uri())))
        .await
        .unwrap();

    let rx = screen.subscribe();
    let err = screen
        .load(&fetcher_for(format!("{}/users/ghost", server.uri())))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::InvalidResponse);
    assert!(!rx.has_changed().unwrap());
    assert_eq!(screen.current().unwrap().handle, "octocat");
}

#[tokio::test]
async fn test_second_load_overwrites() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body("a", "first")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body("b", "second")))
        .mount(&server)
        .await;

    let screen = ProfileScreen::new();
    screen
        .load(&fetcher_for(format!("{}/users/a", server.uri())))
        .await
        .unwrap();
    screen
        .load(&fetcher_for(format!("{}/users/b", server.uri())))
        .await
        .unwrap();

    assert_eq!(
        screen.current(),
        Some(Profile {
            handle: "b".into(),
            avatar_url: "https://avatars.example/b.png".into(),
            bio: "second".into(),
        })
    );
}

#[tokio::test]
async fn test_invalid_data_publishes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"login":"octocat"}"#))
        .mount(&server)
        .await;

    let screen = ProfileScreen::new();
    let err = screen.load(&fetcher_for(server.uri())).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::InvalidData);
    assert!(screen.current().is_none());

    let card = screen.render();
    assert_eq!(card.avatar, Avatar::Placeholder);
    assert_eq!(card.handle, "no username");
    assert_eq!(card.bio, "no bio yet.");
}

#[tokio::test]
async fn test_unreachable_host_publishes_nothing() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let screen = ProfileScreen::new();
    let err = screen
        .load(&fetcher_for(format!("http://{addr}/users/octocat")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Unexpected);
    assert!(screen.current().is_none());
}
