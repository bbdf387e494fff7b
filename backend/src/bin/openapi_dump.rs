//! Print the employee status OpenAPI document as pretty JSON.

use std::io::{self, Write};

use getemps::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}")
}
