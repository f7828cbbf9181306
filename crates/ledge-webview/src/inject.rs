//! Post-load script injection.
//!
//! After a content surface finishes loading, the registry evaluates an
//! optional user script plus a site-specific ad-skip script. Failures are
//! logged per injection and never affect the surface lifecycle.

/// Per-site ad-skip rules, matched by substring against the loaded URL.
const AD_SKIP_RULES: &[(&str, &str)] = &[
    (
        "youtube.com",
        r#"
(function() {
    if (window.__ledgeAdSkip) return;
    window.__ledgeAdSkip = setInterval(function() {
        var btn = document.querySelector('.ytp-skip-ad-button, .ytp-ad-skip-button');
        if (btn) btn.click();
        var video = document.querySelector('.ad-showing video');
        if (video && isFinite(video.duration)) video.currentTime = video.duration;
    }, 1000);
})();
"#,
    ),
    (
        "bilibili.com",
        r#"
(function() {
    if (window.__ledgeAdSkip) return;
    window.__ledgeAdSkip = setInterval(function() {
        var btn = document.querySelector('.bpx-player-toast-jump, .ad-close');
        if (btn) btn.click();
    }, 1000);
})();
"#,
    ),
];

/// The ad-skip script for `url`, if a rule matches its host.
pub fn ad_skip_script_for(url: &str) -> Option<&'static str> {
    AD_SKIP_RULES
        .iter()
        .find(|(host, _)| url.contains(host))
        .map(|(_, script)| *script)
}
