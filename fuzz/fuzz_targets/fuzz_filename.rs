// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use libfuzzer_sys::fuzz_target;
use photo_catalog::classify::{detect_color, detect_theme, generate_tags, MAX_TAGS};
use photo_catalog::config::SourceConfig;
use photo_catalog::derive_title;
use photo_catalog::photo::raw_content_url;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    let title = derive_title(name);
    assert!(!title.contains('_'));

    let text = title.to_lowercase();
    let _ = detect_theme(&text);
    let _ = detect_color(&text);
    assert!(generate_tags(&text).len() <= MAX_TAGS);

    let url = raw_content_url(&SourceConfig::default(), name);
    assert!(url.is_ascii());
});
