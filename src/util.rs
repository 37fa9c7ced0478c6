// Browser helpers shared by components.

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (1024.0, 768.0);
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1024.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(768.0);
    (w, h)
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Non-blank paragraphs of an article body.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_skip_blank_lines() {
        let got: Vec<&str> = paragraphs("one\n\n  two  \n\nthree").collect();
        assert_eq!(got, vec!["one", "two", "three"]);
        assert_eq!(paragraphs("").count(), 0);
    }
}
