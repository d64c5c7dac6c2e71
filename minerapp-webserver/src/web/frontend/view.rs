use maud::{html, Markup, DOCTYPE};

const APP_JS_URL: &str = "/app.js";
const MAIN_CSS_URL: &str = "/main.css";

fn page(title: &str, nav: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
            }
            body {
                header {
                    a class="brand" href="/" { "MinerApp" }
                    @if let Some(nav) = nav {
                        nav { (nav) }
                    }
                }
                main {
                    h1 { (title) }
                    (content)
                }
                script src=(APP_JS_URL) defer {}
            }
        }
    }
}

fn admin_nav() -> Markup {
    html! {
        a href="/admin/dashboard" { "Panel" }
        a href="/admin/lugares" { "Lugares" }
        a href="/admin/categorias" { "Categorías" }
        a href="/admin/reviews" { "Reseñas" }
        a href="/admin/logout" { "Salir" }
    }
}

fn error_box() -> Markup {
    html! {
        p class="error" hidden {}
    }
}

/// A form that is submitted as JSON to `api`.
///
/// After success the browser follows the `redirectTo` of the
/// response or otherwise `redirect`.
fn json_form(api: &str, redirect: &str, fields: Markup, submit: &str) -> Markup {
    html! {
        form data-api=(api) data-redirect=(redirect) {
            (fields)
            (error_box())
            button type="submit" { (submit) }
        }
    }
}

fn input(label: &str, name: &str, kind: &str) -> Markup {
    html! {
        label {
            (label)
            input type=(kind) name=(name) required;
        }
    }
}

pub fn index(signed_in: bool) -> Markup {
    page(
        "Lugares mineros",
        None,
        html! {
            p { "Descubre, guarda y valora lugares de interés minero." }
            ul class="links" {
                @if signed_in {
                    li { a href="/visitante" { "Ver lugares" } }
                } @else {
                    li { a href="/login" { "Iniciar sesión" } }
                    li { a href="/register" { "Crear cuenta" } }
                }
                li { a href="/admin/login" { "Administración" } }
            }
        },
    )
}

pub fn login() -> Markup {
    page(
        "Iniciar sesión",
        None,
        html! {
            (json_form("/api/auth/login", "/visitante", html! {
                (input("Email", "email", "email"))
                (input("Contraseña", "password", "password"))
            }, "Entrar"))
            p { a href="/register" { "Crear cuenta" } }
        },
    )
}

pub fn register() -> Markup {
    page(
        "Crear cuenta",
        None,
        json_form(
            "/api/auth/register",
            "/login",
            html! {
                (input("Nombre", "name", "text"))
                (input("Email", "email", "email"))
                (input("Contraseña", "password", "password"))
            },
            "Registrarse",
        ),
    )
}

pub fn visitor() -> Markup {
    page(
        "Lugares",
        Some(html! {
            button type="button" data-logout="/api/auth/logout" { "Salir" }
        }),
        html! {
            form class="filters" data-filter="places" {
                input type="search" name="q" placeholder="Buscar";
                input type="text" name="categoria" placeholder="Categoría";
                select name="sort" {
                    option value="" { "Más recientes" }
                    option value="likes:desc" { "Más populares" }
                    option value="visitas:desc" { "Más visitados" }
                    option value="nombre:asc" { "Por nombre" }
                }
                button type="submit" { "Filtrar" }
            }
            (error_box())
            div data-list="places" data-source="/api/lugares" {}
        },
    )
}

pub fn admin_login() -> Markup {
    page(
        "Administración",
        None,
        html! {
            (json_form("/admin/login", "/admin/dashboard", html! {
                (input("Usuario", "username", "text"))
                (input("Contraseña", "password", "password"))
            }, "Entrar"))
            p { a href="/admin/register" { "Registrar administrador" } }
        },
    )
}

pub fn admin_register() -> Markup {
    page(
        "Registrar administrador",
        None,
        json_form(
            "/admin/register",
            "/admin/login",
            html! {
                (input("Usuario", "username", "text"))
                (input("Email", "email", "email"))
                (input("Contraseña", "password", "password"))
            },
            "Registrar",
        ),
    )
}

pub fn dashboard() -> Markup {
    page(
        "Panel",
        Some(admin_nav()),
        html! {
            ul class="links" {
                li { a href="/admin/lugares" { "Gestionar lugares" } }
                li { a href="/admin/categorias" { "Gestionar categorías" } }
                li { a href="/admin/reviews" { "Moderar reseñas" } }
            }
        },
    )
}

pub fn admin_places() -> Markup {
    page(
        "Lugares",
        Some(admin_nav()),
        html! {
            form data-upload="/admin/lugares" enctype="multipart/form-data" {
                (input("Nombre", "nombre", "text"))
                label { "Descripción" textarea name="descripcion" {} }
                label { "Categoría" input type="text" name="categoria"; }
                label { "Etiquetas" input type="text" name="tags" placeholder="separadas por comas"; }
                label { "Latitud" input type="text" name="lat"; }
                label { "Longitud" input type="text" name="lng"; }
                label { "Enlace de Google Maps" input type="url" name="googleMapsLink"; }
                label { "Imágenes" input type="file" name="images" accept="image/*" multiple; }
                (error_box())
                button type="submit" { "Crear lugar" }
            }
            div data-list="admin-places" data-source="/admin/lugares" {}
        },
    )
}

pub fn admin_categories() -> Markup {
    page(
        "Categorías",
        Some(admin_nav()),
        html! {
            (json_form("/admin/categorias/api", "/admin/categorias", html! {
                (input("Nombre", "nombre", "text"))
            }, "Crear categoría"))
            div data-list="categories" data-source="/admin/categorias/api" {}
        },
    )
}

pub fn admin_reviews() -> Markup {
    page(
        "Reseñas",
        Some(admin_nav()),
        html! {
            form class="filters" data-filter="reviews" {
                select name="rating" {
                    option value="" { "Todas" }
                    @for rating in 1..=5 {
                        option value=(rating) { (rating) " ★" }
                    }
                }
                input type="search" name="q" placeholder="Buscar en comentarios";
                button type="submit" { "Filtrar" }
            }
            (error_box())
            div data-list="reviews" data-source="/admin/reviews/data" {}
        },
    )
}
