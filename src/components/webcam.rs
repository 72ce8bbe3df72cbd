//! Webcam bridge
//!
//! The camera is opened through `getUserMedia` in the webview on mount and
//! every track is stopped when the component is dropped. A failure raises
//! the camera toast once; the surrounding flow carries on without a feed.

use dioxus::prelude::*;
use pensionguardian_core::{GuardianError, GuardianResult, Notification};

use crate::context::use_toaster;

const VIDEO_ELEMENT_ID: &str = "camera-feed";

const START_CAMERA_JS: &str = r#"
const video = document.getElementById("camera-feed");
try {
    const stream = await navigator.mediaDevices.getUserMedia({
        video: { facingMode: "user", width: 640, height: 480 }
    });
    if (window.__pensionguardianReleased) {
        stream.getTracks().forEach(track => track.stop());
        dioxus.send("released");
    } else {
        window.__pensionguardianStream = stream;
        if (video) { video.srcObject = stream; }
        dioxus.send("ok");
    }
} catch (error) {
    dioxus.send(String(error && error.message ? error.message : error));
}
"#;

const STOP_CAMERA_JS: &str = r#"
window.__pensionguardianReleased = true;
if (window.__pensionguardianStream) {
    window.__pensionguardianStream.getTracks().forEach(track => track.stop());
    window.__pensionguardianStream = null;
}
"#;

async fn start_camera() -> GuardianResult<()> {
    let mut eval = document::eval(&format!(
        "window.__pensionguardianReleased = false;\n{}",
        START_CAMERA_JS
    ));
    let reply = eval
        .recv::<String>()
        .await
        .map_err(|e| GuardianError::CameraUnavailable(e.to_string()))?;
    match reply.as_str() {
        "ok" | "released" => Ok(()),
        reason => Err(GuardianError::CameraUnavailable(reason.to_string())),
    }
}

fn stop_camera() {
    let _ = document::eval(STOP_CAMERA_JS);
    tracing::debug!("camera released");
}

#[derive(Props, Clone, PartialEq)]
pub struct WebcamProps {
    /// Extra classes for the video element (liveness animations)
    #[props(default)]
    pub video_class: Option<String>,
    /// Overlay content drawn over the feed
    pub children: Element,
}

#[component]
pub fn Webcam(props: WebcamProps) -> Element {
    let mut toaster = use_toaster();

    use_effect(move || {
        spawn(async move {
            match start_camera().await {
                Ok(()) => tracing::info!("camera acquired"),
                Err(e) => {
                    tracing::warn!("{}", e);
                    toaster.push(Notification::camera_failed());
                }
            }
        });
    });

    use_drop(stop_camera);

    let video_class = match props.video_class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("webcam-video {}", extra),
        _ => "webcam-video".to_string(),
    };

    rsx! {
        div { class: "webcam-container fade-in",
            video {
                id: VIDEO_ELEMENT_ID,
                class: "{video_class}",
                autoplay: true,
                playsinline: true,
                muted: true,
            }
            div { class: "webcam-overlay",
                div { class: "face-oval" }
                {props.children}
            }
        }
    }
}
