use crate::web::api::tests::prelude::*;

fn get_page<'c>(client: &'c Client, uri: &'static str) -> LocalResponse<'c> {
    client.get(uri).header(Accept::HTML).dispatch()
}

#[test]
fn public_pages() {
    let env = setup();
    for uri in ["/", "/login", "/register", "/admin/login", "/admin/register"] {
        let res = get_page(&env.client, uri);
        assert_eq!(res.status(), Status::Ok, "{uri}");
        assert_eq!(res.content_type(), Some(ContentType::HTML), "{uri}");
    }
}

#[test]
fn index_page_links_to_places_after_login() {
    let env = setup();
    let body = get_page(&env.client, "/").into_string().unwrap();
    assert!(body.contains("href=\"/login\""));
    sign_in_user(&env.client, "Ana", "ana@example.com");
    let body = get_page(&env.client, "/").into_string().unwrap();
    assert!(body.contains("href=\"/visitante\""));
    assert!(!body.contains("href=\"/login\""));
}

#[test]
fn visitor_page_requires_a_session() {
    let env = setup();
    let res = get_page(&env.client, "/visitante");
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/login"));

    sign_in_user(&env.client, "Ana", "ana@example.com");
    let res = get_page(&env.client, "/visitante");
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("data-source=\"/api/lugares\""));

    let res = get_page(&env.client, "/login");
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/visitante"));
}

#[test]
fn admin_pages_require_a_session() {
    let env = setup();
    for uri in [
        "/admin/dashboard",
        "/admin/lugares",
        "/admin/categorias",
        "/admin/reviews",
    ] {
        let res = get_page(&env.client, uri);
        assert_eq!(res.status(), Status::SeeOther, "{uri}");
        assert_eq!(res.headers().get_one("Location"), Some("/admin/login"));
    }
    let res = get_page(&env.client, "/admin");
    assert_eq!(res.headers().get_one("Location"), Some("/admin/login"));
}

#[test]
fn admin_pages_after_login() {
    let env = setup();
    post_json(
        &env.client,
        "/admin/register",
        json!({ "username": "root", "email": "root@example.com", "password": "secret" }),
    );
    post_json(
        &env.client,
        "/admin/login",
        json!({ "username": "root", "password": "secret" }),
    );
    for uri in [
        "/admin/dashboard",
        "/admin/lugares",
        "/admin/categorias",
        "/admin/reviews",
    ] {
        let res = get_page(&env.client, uri);
        assert_eq!(res.status(), Status::Ok, "{uri}");
    }
    let res = get_page(&env.client, "/admin");
    assert_eq!(res.headers().get_one("Location"), Some("/admin/dashboard"));
}

#[test]
fn static_assets() {
    let env = setup();
    let res = env.client.get("/app.js").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::JavaScript));
    let res = env.client.get("/main.css").dispatch();
    assert_eq!(res.content_type(), Some(ContentType::CSS));
}
