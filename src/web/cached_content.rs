use rocket::response::{self, Responder};
use rocket::{Request, Response};

/// Makes the response publicly cacheable for the number of seconds.
pub struct Cached<R>(pub u32, pub R);

impl<'r, 'o: 'r, R: Responder<'r, 'o>> Responder<'r, 'o> for Cached<R> {
    #[inline(always)]
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'o> {
        Response::build_from(self.1.respond_to(request)?)
            .raw_header("Cache-Control", format!("public, max-age={}, immutable", self.0))
            .ok()
    }
}
