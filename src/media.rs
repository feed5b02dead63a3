//! Media delivery and request-body construction.
//!
//! One builder consumes a descriptor's field spec plus the caller's values
//! and produces the request body for either delivery mode: a multipart
//! form with a streamed file part for local media, or a urlencoded form
//! (media referenced through a `fileUrl` field) otherwise.

use std::path::{Path, PathBuf};

use reqwest::Body;
use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;

use crate::error::Result;
use crate::ops::{Descriptor, Field};

/// Field name carrying URL-delivered media.
const FILE_URL_FIELD: &str = "fileUrl";

/// Where probe or enrollment media comes from.
///
/// Local files stream into a multipart body part; remote URLs are passed
/// along as a form field and fetched on the service side. A source is
/// consumed by exactly one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Path to a local media file (audio or video).
    File(PathBuf),
    /// Publicly reachable URL of the media.
    Url(String),
}

impl MediaSource {
    /// Media stored in a local file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        MediaSource::File(path.into())
    }

    /// Media reachable over HTTP(S).
    pub fn url(url: impl Into<String>) -> Self {
        MediaSource::Url(url.into())
    }
}

/// Caller values for one invocation, consumed in descriptor field order.
#[derive(Default)]
pub(crate) struct Values<'a> {
    pub texts: &'a [&'a str],
    pub flags: &'a [bool],
    pub media: Option<MediaSource>,
}

/// A prepared request body. Reqwest derives the content type per kind:
/// multipart boundary for `Multipart`, `application/x-www-form-urlencoded`
/// for `Form`.
#[derive(Debug)]
pub(crate) enum Payload {
    Empty,
    Form(Vec<(&'static str, String)>),
    Multipart(Form),
}

/// Builds the request body for `desc` from `values`.
///
/// Field/value arity is a property of the static registry, so a mismatch
/// panics rather than surfacing as a runtime failure. Unreadable local
/// media returns an IO error before any network activity.
pub(crate) async fn build(desc: &Descriptor, values: Values<'_>) -> Result<Payload> {
    if desc.fields.is_empty() {
        return Ok(Payload::Empty);
    }

    let mut texts = values.texts.iter();
    let mut flags = values.flags.iter();
    let mut pairs: Vec<(&'static str, String)> = Vec::new();
    let mut file: Option<(&'static str, &Path)> = None;

    for field in desc.fields {
        match field {
            Field::Text(name) => {
                let value = texts
                    .next()
                    .unwrap_or_else(|| panic!("{}: missing value for text field `{name}`", desc.name));
                pairs.push((*name, (*value).to_string()));
            }
            Field::Flag(name) => {
                let value = flags
                    .next()
                    .unwrap_or_else(|| panic!("{}: missing value for flag `{name}`", desc.name));
                pairs.push((*name, value.to_string()));
            }
            Field::Media(name) => match &values.media {
                Some(MediaSource::File(path)) => file = Some((*name, path.as_path())),
                Some(MediaSource::Url(url)) => pairs.push((FILE_URL_FIELD, url.clone())),
                None => panic!("{}: missing media source", desc.name),
            },
        }
    }

    match file {
        Some((name, path)) => {
            let part = stream_part(path).await?;
            let mut form = Form::new();
            for (key, value) in pairs {
                form = form.text(key, value);
            }
            Ok(Payload::Multipart(form.part(name, part)))
        }
        None => Ok(Payload::Form(pairs)),
    }
}

/// Opens `path` and wraps it as a streamed multipart part, so uploads are
/// chunked from disk instead of buffered whole. The handle is owned by the
/// part and closed when the request body is dropped, on every exit path.
async fn stream_part(path: &Path) -> Result<Part> {
    let file = tokio::fs::File::open(path).await?;
    let length = file.metadata().await?.len();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "media".to_string());
    let body = Body::wrap_stream(ReaderStream::new(file));
    Ok(Part::stream_with_length(body, length).file_name(filename))
}
