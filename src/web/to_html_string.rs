use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::{Request, Response};

/// Responds with an HTML body for any `T: ToString`.
pub struct ToHtmlString<T>(pub T);

impl<'r, R: ToString> Responder<'r, 'static> for ToHtmlString<R> {
    #[inline(always)]
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(self.0.to_string().respond_to(request)?)
            .header(ContentType::HTML)
            .raw_header("Cache-Control", "private")
            .ok()
    }
}
