use std::borrow::Cow;

/// Builds and follows page URLs on behalf of the pagination code.
pub trait UrlBuilder {
    /// Return `url` with every `(key, value)` in `params` set, overwriting
    /// existing values of the same key. Path, fragment and unrelated
    /// parameters are kept as they are.
    fn set_query_params(&self, url: &str, params: &[(&str, String)]) -> String;

    /// Navigate to `url`.
    fn go_to(&self, url: &str);
}

/// Query-string based [`UrlBuilder`]. Navigation prints the target URL on
/// stdout, which is how the command line front end hands it to a caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStringUrls;

impl UrlBuilder for QueryStringUrls {
    fn set_query_params(&self, url: &str, params: &[(&str, String)]) -> String {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut written = vec![false; params.len()];
        let mut pairs: Vec<Cow<'_, str>> = Vec::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let raw_key = pair.split_once('=').map_or(pair, |(k, _)| k);
            let key = decode_component(raw_key);
            match params.iter().position(|(k, _)| *k == key) {
                Some(idx) if !written[idx] => {
                    written[idx] = true;
                    pairs.push(Cow::Owned(encode_pair(params[idx].0, &params[idx].1)));
                }
                // Later duplicates of an overwritten key are dropped.
                Some(_) => {}
                None => pairs.push(Cow::Borrowed(pair)),
            }
        }

        for (idx, (key, value)) in params.iter().enumerate() {
            if !written[idx] {
                pairs.push(Cow::Owned(encode_pair(key, value)));
            }
        }

        let mut out = String::with_capacity(url.len() + 16);
        out.push_str(path);
        if !pairs.is_empty() {
            out.push('?');
            out.push_str(&pairs.join("&"));
        }
        if let Some(fragment) = fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    fn go_to(&self, url: &str) {
        tracing::info!("Navigating to {url}");
        println!("{url}");
    }
}

/// Read the value of `key` from the query string of `url`, if present.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let rest = url.split_once('#').map_or(url, |(rest, _)| rest);
    let (_, query) = rest.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| decode_component(k) == key)
        .map(|(_, v)| decode_component(v).into_owned())
}

fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
