//! The navbar's decorative motion layers.
//!
//! Geometry and timing are fixed; layers of the same kind share one
//! `@keyframes` rule and differ only in position, duration and delay.

use super::{Animation, Ease, Keyframes, Length, Track, Transition};
use crate::components::icons::Glyph;
use crate::error::Result;

pub const PARTICLE_COUNT: usize = 6;
pub const MOBILE_SCAN_LINES: usize = 3;

const NAV_ENTER: &str = "jc-nav-enter";
const PARTICLE: &str = "jc-particle";
const SCAN_BEAM: &str = "jc-scan-beam";
const FLOAT: &str = "jc-float";
const LOGO_GLOW: &str = "jc-logo-glow";
const LINK_ENTER: &str = "jc-link-enter";
const CTA_ENTER: &str = "jc-cta-enter";
const MOBILE_SCAN: &str = "jc-mobile-scan";
const MOBILE_GLOW: &str = "jc-mobile-glow";

/// A positioned, animated decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub left_pct: Option<u32>,
    pub top_pct: Option<u32>,
    pub animation: Animation,
}

impl Layer {
    fn new(animation: Animation) -> Self {
        Self {
            left_pct: None,
            top_pct: None,
            animation,
        }
    }

    pub fn style(&self) -> String {
        let mut style = String::new();
        if let Some(left) = self.left_pct {
            style.push_str(&format!("left: {left}%; "));
        }
        if let Some(top) = self.top_pct {
            style.push_str(&format!("top: {top}%; "));
        }
        style.push_str(&self.animation.style());
        style
    }
}

fn animation(keyframes: &'static str, transition: Transition) -> Animation {
    Animation {
        keyframes,
        transition,
    }
}

/// Header slide-in on mount.
pub fn header_entrance() -> Animation {
    animation(NAV_ENTER, Transition::new(600).ease(Ease::EaseOut))
}

/// Thin vertical sparks drifting through the header.
pub fn particles() -> Vec<Layer> {
    (0..PARTICLE_COUNT as u32)
        .map(|i| Layer {
            left_pct: Some(20 + i * 15),
            top_pct: None,
            animation: animation(
                PARTICLE,
                Transition::new(4_000 + i * 500)
                    .delay(i * 800)
                    .forever()
                    .ease(Ease::Linear),
            ),
        })
        .collect()
}

/// Light sweeping along the header's top edge.
pub fn scan_beam() -> Layer {
    Layer::new(animation(
        SCAN_BEAM,
        Transition::new(4_000).forever().ease(Ease::Linear),
    ))
}

/// Faint code/zap glyphs bobbing behind the content.
pub fn floating_icons() -> Vec<(Glyph, Layer)> {
    [Glyph::Code, Glyph::Zap]
        .into_iter()
        .zip(0u32..)
        .map(|(glyph, i)| {
            let layer = Layer {
                left_pct: Some(30 + i * 40),
                top_pct: Some(50),
                animation: animation(FLOAT, Transition::new(4_000 + i * 2_000).forever()),
            };
            (glyph, layer)
        })
        .collect()
}

/// Pulsing glow around the logo box.
pub fn logo_glow() -> Animation {
    animation(LOGO_GLOW, Transition::new(3_000).forever())
}

/// Staggered fade-in of the desktop link at `index`.
pub fn desktop_link_entrance(index: usize) -> Animation {
    animation(LINK_ENTER, Transition::new(400).delay(index as u32 * 100).ease(Ease::EaseOut))
}

/// Call-to-action pop-in after the links.
pub fn cta_entrance() -> Animation {
    animation(CTA_ENTER, Transition::new(400).delay(400).ease(Ease::EaseOut))
}

/// Horizontal scan lines inside the open mobile panel.
pub fn mobile_scan_lines() -> Vec<Layer> {
    (0..MOBILE_SCAN_LINES as u32)
        .map(|i| Layer {
            left_pct: None,
            top_pct: Some(25 + i * 25),
            animation: animation(
                MOBILE_SCAN,
                Transition::new(3_000)
                    .delay(i * 1_000)
                    .forever()
                    .ease(Ease::Linear),
            ),
        })
        .collect()
}

pub fn mobile_glow() -> Layer {
    Layer::new(animation(MOBILE_GLOW, Transition::new(3_000).forever()))
}

/// Stagger for the mobile panel's links as they slide in.
pub fn mobile_item_delay_ms(index: usize) -> u32 {
    index as u32 * 100
}

/// Every keyframes rule referenced by the layers above.
pub fn keyframes() -> Vec<Keyframes> {
    vec![
        Keyframes::new(NAV_ENTER).track(Track::TranslateY(vec![Length::Px(-100.0), Length::Px(0.0)])),
        Keyframes::new(PARTICLE)
            .track(Track::TranslateY(vec![
                Length::Px(-20.0),
                Length::Px(100.0),
                Length::Px(-20.0),
            ]))
            .track(Track::Opacity(vec![0.0, 0.6, 0.0])),
        Keyframes::new(SCAN_BEAM)
            .track(Track::TranslateX(vec![
                Length::Percent(-100.0),
                Length::Percent(0.0),
                Length::Percent(100.0),
            ]))
            .track(Track::Opacity(vec![0.0, 1.0, 0.0])),
        Keyframes::new(FLOAT)
            .track(Track::TranslateY(vec![
                Length::Percent(-50.0),
                Length::Percent(-50.0),
                Length::Percent(-50.0),
            ]))
            .track(Track::TranslateY(vec![
                Length::Px(-1.0),
                Length::Px(1.0),
                Length::Px(-1.0),
            ]))
            .track(Track::Opacity(vec![0.1, 0.2, 0.1])),
        Keyframes::new(LOGO_GLOW).track(Track::BoxShadow(vec![
            "0 0 0 rgba(245, 158, 11, 0)",
            "0 0 20px rgba(245, 158, 11, 0.5)",
            "0 0 0 rgba(245, 158, 11, 0)",
        ])),
        Keyframes::new(LINK_ENTER)
            .track(Track::TranslateY(vec![Length::Px(-10.0), Length::Px(0.0)]))
            .track(Track::Opacity(vec![0.0, 1.0])),
        Keyframes::new(CTA_ENTER)
            .track(Track::Scale(vec![0.9, 1.0]))
            .track(Track::Opacity(vec![0.0, 1.0])),
        Keyframes::new(MOBILE_SCAN)
            .track(Track::ScaleX(vec![0.0, 1.0, 0.0]))
            .track(Track::Opacity(vec![0.0, 0.6, 0.0])),
        Keyframes::new(MOBILE_GLOW).track(Track::Opacity(vec![0.05, 0.15, 0.05])),
    ]
}

/// All keyframes rules as one stylesheet.
pub fn stylesheet() -> Result<String> {
    keyframes().iter().map(Keyframes::to_css).collect()
}
