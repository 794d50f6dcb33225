use crate::{context::Context, debug, error::ApplicationError, log, target::Target};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use std::{borrow::Cow, path::Path};

const DATE_FORMAT: &str = "%Y-%m-%d";

static HAND_IN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(Hand in date:\s*)\d{4}-\d{2}-\d{2}").unwrap());

/// Rewrites the date of the first hand-in date header.
///
/// Returns the source as borrowed if no header is found.
pub fn stamp_hand_in_date(source: &[u8], date: NaiveDate) -> Cow<'_, [u8]> {
    let date = date.format(DATE_FORMAT).to_string();

    HAND_IN_DATE.replace(source, |captures: &Captures| {
        [&captures[1], date.as_bytes()].concat()
    })
}

/// Stamps today's date into the source of a target in place.
pub async fn stamp(context: &Context, target: &Target) -> Result<bool, ApplicationError> {
    let source_path = target.source();
    let path = Path::new(&source_path);
    let mut source = vec![];

    context.file_system().read_file(path, &mut source).await?;

    let stamped = match stamp_hand_in_date(&source, context.clock().today()) {
        Cow::Borrowed(_) => false,
        Cow::Owned(content) => {
            context.file_system().write_file(path, &content).await?;
            true
        }
    };

    let mut console = context.console().lock().await;

    if stamped {
        log!(console, "updated hand-in date in {}", path.display());
    } else {
        debug!(context, console, "no hand-in date found in {}", path.display());
    }

    Ok(stamped)
}
