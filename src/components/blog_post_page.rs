use yew::prelude::*;

use super::app::AppContext;
use super::link::Link;
use crate::catalog::Catalog;
use crate::model::Star;
use crate::route::Route;
use crate::util;

#[derive(Debug, PartialEq)]
pub enum ArticleView<'a> {
    Found(&'a Star),
    NotFound,
}

pub fn resolve<'a>(catalog: &'a Catalog, id: &str) -> ArticleView<'a> {
    match catalog.get_article_by_id(id) {
        Some(star) => ArticleView::Found(star),
        None => ArticleView::NotFound,
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height:100vh; background:#020617; color:#fff; display:flex; align-items:center; justify-content:center;">
            <div style="text-align:center;">
                <h1 style="margin:0 0 16px; font-size:36px; font-weight:700;">{"Star Not Found"}</h1>
                <Link to={Route::Universe} style="color:#818cf8; text-decoration:none;">{"← Return to Universe"}</Link>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BlogPostPageProps {
    pub id: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let ctx = use_context::<AppContext>();
    let view = ctx.as_ref().map(|c| resolve(&c.catalog, &props.id));

    let Some(ArticleView::Found(star)) = view else {
        log::info!("no article with id {:?}", props.id);
        return html! { <NotFound /> };
    };

    let chip = "display:inline-flex; align-items:center; gap:4px; padding:4px 12px; border-radius:9999px; background:rgba(255,255,255,0.1); border:1px solid rgba(255,255,255,0.2); backdrop-filter:blur(12px);";
    html! {
        <div style="min-height:100vh; background:#020617; color:#e2e8f0; overflow-y:auto;">
            <div style={format!("position:relative; height:40vh; width:100%; display:flex; align-items:flex-end; padding:32px; box-sizing:border-box; background:linear-gradient(to bottom, {c}20, #020617), radial-gradient(circle at 50% 50%, {c}10, transparent);", c = star.color)}>
                <div style="position:absolute; top:32px; left:32px;">
                    <Link to={Route::Universe}
                        style="display:flex; align-items:center; gap:8px; color:rgba(255,255,255,0.8); text-decoration:none; background:rgba(0,0,0,0.2); padding:8px 16px; border-radius:9999px; border:1px solid rgba(255,255,255,0.1);">
                        {"← Back to Universe"}
                    </Link>
                </div>
                <div style="max-width:896px; width:100%; margin:0 auto;">
                    <div style="display:flex; align-items:center; gap:16px; margin-bottom:16px; font-size:14px; color:#cbd5e1;">
                        <span style={chip}>{ star.category.clone() }</span>
                        <span style={chip}>{ star.date.clone() }</span>
                    </div>
                    <h1 style="margin:0 0 16px; font-size:clamp(36px, 6vw, 60px); font-weight:700; line-height:1.15; color:#fff;">{ star.title.clone() }</h1>
                    <p style="margin:0; max-width:672px; font-size:20px; color:#cbd5e1;">{ star.excerpt.clone() }</p>
                </div>
            </div>
            <article style="max-width:768px; margin:0 auto; padding:64px 24px;">
                { for util::paragraphs(&star.content).map(|p| html! {
                    <p style="margin:0 0 24px; font-size:18px; line-height:1.75; color:#cbd5e1;">{ p.to_string() }</p>
                }) }
                <div style="margin-top:64px; padding-top:32px; border-top:1px solid #1e293b; display:flex; justify-content:space-between; align-items:center;">
                    <div style="color:#64748b; font-style:italic;">{"End of transmission."}</div>
                    <Link to={Route::Universe} style="color:#818cf8; font-weight:600; text-decoration:none;">{"Explore other stars"}</Link>
                </div>
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(|| 0.5)
    }

    #[test]
    fn known_id_resolves_to_its_article() {
        let c = catalog();
        match resolve(&c, "3") {
            ArticleView::Found(star) => assert_eq!(star.id, "3"),
            ArticleView::NotFound => panic!("article 3 should exist"),
        }
    }

    #[test]
    fn unknown_or_ambient_id_is_not_found() {
        let c = catalog();
        assert_eq!(resolve(&c, "does-not-exist"), ArticleView::NotFound);
        assert_eq!(resolve(&c, "ambient-0"), ArticleView::NotFound);
        assert_eq!(resolve(&c, ""), ArticleView::NotFound);
    }

    #[test]
    fn not_found_view_links_back_to_universe() {
        let html = pollster::block_on(yew::ServerRenderer::<NotFound>::new().render());
        assert!(html.contains("Star Not Found"), "{html}");
        assert!(html.contains("Return to Universe"), "{html}");
        assert!(html.contains(&format!("href=\"{}\"", Route::Universe.to_path())), "{html}");
    }
}
