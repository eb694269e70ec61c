use yew::prelude::*;
use chrono::{DateTime, Utc};
use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

pub const ASSISTANT_GREETING: &str =
    "👋 Hi there! I'm SoftSell's AI assistant. How can I help you today?";

// Shown as the assistant's turn whenever the proxy call fails for any
// reason. The failure itself only goes to the console.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I've encountered an error. Please try again later.";

const SYSTEM_PROMPT: &str = "You are SoftSell's AI assistant. You help users with information \
    about software license resale. Be helpful, friendly, and concise. Provide accurate \
    information about the process of selling software licenses, pricing, legality, and payment \
    methods. The company typically offers 40-70% of retail value for licenses. The process \
    usually takes 3-5 business days from submission to payment.";

#[derive(Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub role: String,
    pub content: String,
}

impl ApiMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    messages: Vec<ApiMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or(false)]
    pub is_dark_mode: bool,
}

// Cosmetic delay before the assistant's reply is shown, proportional to
// reply length (in characters, not bytes) and capped.
pub(crate) fn typing_delay_ms(reply: &str) -> u32 {
    (reply.chars().count() as u32)
        .saturating_mul(10)
        .min(1_500)
}

pub(crate) fn sendable(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub(crate) fn next_message_id(transcript_len: usize) -> u32 {
    transcript_len as u32 + 1
}

pub(crate) fn displayed_reply(outcome: &Option<String>) -> &str {
    outcome.as_deref().unwrap_or(FALLBACK_REPLY)
}

// A failed exchange leaves the conversation history untouched: the
// apology only ever appears in the transcript, never as context for a
// later upstream call.
pub(crate) fn history_after_exchange(
    sent: Vec<ApiMessage>,
    outcome: &Option<String>,
) -> Option<Vec<ApiMessage>> {
    outcome.as_ref().map(|reply| {
        let mut turns = sent;
        turns.push(ApiMessage::new("assistant", reply.clone()));
        turns
    })
}

pub(crate) fn drag_position(client_x: f64, client_y: f64, offset: (f64, f64)) -> (f64, f64) {
    (client_x - offset.0, client_y - offset.1)
}

pub(crate) fn panel_size(expanded: bool, viewport_width: f64) -> (&'static str, &'static str) {
    if viewport_width <= 768.0 {
        if expanded {
            ("90vw", "70vh")
        } else {
            ("85vw", "60vh")
        }
    } else if expanded {
        ("450px", "600px")
    } else {
        ("350px", "500px")
    }
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

fn set_body_cursor(cursor: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("cursor", cursor);
    }
}

struct WidgetTheme {
    chat_bg: &'static str,
    message_bg_bot: &'static str,
    message_text_bot: &'static str,
    input_bg: &'static str,
    input_text: &'static str,
    muted_text: &'static str,
    border: &'static str,
}

impl WidgetTheme {
    fn for_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self {
                chat_bg: "#2c3034",
                message_bg_bot: "#3a3f44",
                message_text_bot: "#f8f9fa",
                input_bg: "#3a3f44",
                input_text: "#f8f9fa",
                muted_text: "#adb5bd",
                border: "#495057",
            }
        } else {
            Self {
                chat_bg: "#ffffff",
                message_bg_bot: "#f1f3f5",
                message_text_bot: "#212529",
                input_bg: "#ffffff",
                input_text: "#212529",
                muted_text: "#6c757d",
                border: "#dee2e6",
            }
        }
    }
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let is_open = use_state(|| false);
    let is_expanded = use_state(|| false);
    let is_typing = use_state(|| false);
    let input_value = use_state(String::new);

    let messages = use_state(|| {
        vec![ChatMessage {
            id: 1,
            text: ASSISTANT_GREETING.to_string(),
            is_user: false,
            timestamp: Utc::now(),
        }]
    });
    let history = use_state(|| {
        vec![
            ApiMessage::new("system", SYSTEM_PROMPT),
            ApiMessage::new("assistant", ASSISTANT_GREETING),
        ]
    });

    // None means the toggle button sits at its bottom-right anchor;
    // Some holds the dragged top-left corner in viewport coordinates.
    let position = use_state(|| None::<(f64, f64)>);
    let is_dragging = use_state(|| false);
    let drag_offset = use_state(|| (0.0, 0.0));
    let toggle_ref = use_node_ref();
    let messages_end = use_node_ref();

    // Drop any widget position an earlier build persisted.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
                    let _ = storage.remove_item("chat_widget_position");
                }
                || ()
            },
            (),
        );
    }

    // Snap back to the anchor whenever the window is resized.
    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let resize_callback = Closure::wrap(Box::new(move || {
                    position.set(None);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Document-level move/up listeners, re-registered when the drag
    // state changes so the closures see the current offset.
    {
        let position = position.clone();
        let is_dragging_handle = is_dragging.clone();
        use_effect_with_deps(
            move |&(dragging, offset): &(bool, (f64, f64))| {
                let window = web_sys::window().unwrap();

                let move_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    if dragging {
                        position.set(Some(drag_position(
                            e.client_x() as f64,
                            e.client_y() as f64,
                            offset,
                        )));
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                let up_callback = Closure::wrap(Box::new(move || {
                    if dragging {
                        is_dragging_handle.set(false);
                        set_body_cursor("default");
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        move_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "mouseup",
                        up_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            move_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "mouseup",
                            up_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (*is_dragging, *drag_offset),
        );
    }

    // Keep the newest message in view.
    {
        let messages_end = messages_end.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(end) = messages_end.cast::<web_sys::Element>() {
                    let mut options = ScrollIntoViewOptions::new();
                    options.behavior(ScrollBehavior::Smooth);
                    end.scroll_into_view_with_scroll_into_view_options(&options);
                }
                || ()
            },
            (messages.len(), *is_typing),
        );
    }

    let toggle_chat = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(!*is_open);
        })
    };

    let toggle_expand = {
        let is_expanded = is_expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_expanded.set(!*is_expanded);
        })
    };

    let on_mouse_down = {
        let is_open = is_open.clone();
        let is_dragging = is_dragging.clone();
        let drag_offset = drag_offset.clone();
        let toggle_ref = toggle_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // The open panel is not draggable.
            if *is_open {
                return;
            }
            let Some(button) = toggle_ref.cast::<web_sys::Element>() else {
                return;
            };
            let rect = button.get_bounding_client_rect();
            drag_offset.set((
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
            ));
            is_dragging.set(true);
            set_body_cursor("grabbing");
            e.prevent_default();
        })
    };

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_value.set(input.value());
        })
    };

    let on_submit = {
        let input_value = input_value.clone();
        let messages = messages.clone();
        let history = history.clone();
        let is_typing = is_typing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(text) = sendable(&input_value) else {
                return;
            };
            let text = text.to_string();

            let mut transcript = (*messages).clone();
            transcript.push(ChatMessage {
                id: next_message_id(transcript.len()),
                text: text.clone(),
                is_user: true,
                timestamp: Utc::now(),
            });
            messages.set(transcript.clone());

            // The user turn rides along with the request; it only joins
            // the stored history once the exchange succeeds.
            let mut turns = (*history).clone();
            turns.push(ApiMessage::new("user", text));

            is_typing.set(true);
            input_value.set(String::new());

            let messages = messages.clone();
            let history = history.clone();
            let is_typing = is_typing.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = fetch_reply(&turns).await;
                let reply = displayed_reply(&outcome).to_string();

                TimeoutFuture::new(typing_delay_ms(&reply)).await;

                is_typing.set(false);

                let mut transcript = transcript;
                transcript.push(ChatMessage {
                    id: next_message_id(transcript.len()),
                    text: reply,
                    is_user: false,
                    timestamp: Utc::now(),
                });
                messages.set(transcript);

                if let Some(turns) = history_after_exchange(turns, &outcome) {
                    history.set(turns);
                }
            });
        })
    };

    let theme = WidgetTheme::for_mode(props.is_dark_mode);
    let (panel_width, panel_height) = panel_size(*is_expanded, viewport_width());
    let toggle_size = if viewport_width() <= 768.0 { "70px" } else { "60px" };

    let toggle_style = match *position {
        Some((x, y)) => format!(
            "position: fixed; left: {x}px; top: {y}px; width: {toggle_size}; height: {toggle_size};"
        ),
        None => format!(
            "position: fixed; bottom: 20px; right: 20px; width: {toggle_size}; height: {toggle_size};"
        ),
    };
    let toggle_cursor = if *is_open { "pointer" } else { "grab" };

    html! {
        <div class="chat-widget">
            <style>
                {r#"
                .chat-toggle-btn {
                    border: none;
                    border-radius: 50%;
                    background: var(--primary-color);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    z-index: 1050;
                    font-size: 1.4rem;
                }
                .chat-toggle-btn:active { cursor: grabbing; }
                .chat-panel {
                    position: fixed;
                    bottom: 90px;
                    right: 20px;
                    max-width: 95vw;
                    max-height: 80vh;
                    border-radius: 12px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    z-index: 1050;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    transition: all 0.3s ease-in-out;
                }
                .chat-panel-header {
                    background: var(--primary-color);
                    color: #fff;
                    padding: 0.9rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .chat-panel-header h5 { margin: 0; }
                .chat-header-btn {
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    font-size: 1rem;
                    margin-left: 0.75rem;
                }
                .chat-transcript {
                    flex: 1;
                    overflow-y: auto;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                }
                .chat-bubble {
                    max-width: 80%;
                    padding: 0.75rem 1rem;
                    margin-bottom: 0.75rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
                }
                .chat-bubble .bubble-meta {
                    font-size: 0.75rem;
                    margin-bottom: 0.25rem;
                }
                .chat-row-user { display: flex; justify-content: flex-end; }
                .chat-row-bot { display: flex; justify-content: flex-start; }
                .chat-input-row { display: flex; padding: 0.75rem; border-top: 1px solid; }
                .chat-input {
                    flex: 1;
                    padding: 0.75rem;
                    font-size: 1rem;
                    border: 1px solid;
                    border-radius: 8px;
                }
                .chat-send-btn {
                    margin-left: 0.5rem;
                    padding: 0 1rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--primary-color);
                    color: #fff;
                    cursor: pointer;
                }
                .chat-send-btn:disabled { opacity: 0.6; cursor: default; }
                .typing-indicator { display: flex; align-items: center; }
                .typing-indicator span {
                    height: 10px;
                    width: 10px;
                    border-radius: 50%;
                    display: inline-block;
                    margin-right: 3px;
                    animation: bounce 1.5s infinite ease-in-out;
                }
                .typing-indicator span:nth-child(2) { animation-delay: 0.2s; }
                .typing-indicator span:nth-child(3) { animation-delay: 0.4s; }
                @keyframes bounce {
                    0%, 60%, 100% { transform: translateY(0); }
                    30% { transform: translateY(-5px); }
                }
                "#}
            </style>

            <button
                ref={toggle_ref.clone()}
                class="chat-toggle-btn"
                style={format!("{toggle_style} cursor: {toggle_cursor};")}
                onclick={toggle_chat.clone()}
                onmousedown={on_mouse_down}
                aria-label={if *is_open { "Close chat" } else { "Open chat" }}
            >
                { if *is_open { "✕" } else { "💬" } }
            </button>

            {
                if *is_open {
                    html! {
                        <div
                            class="chat-panel"
                            style={format!(
                                "width: {panel_width}; height: {panel_height}; background-color: {};",
                                theme.chat_bg
                            )}
                        >
                            <div class="chat-panel-header">
                                <h5>{"🤖 SoftSell Assistant"}</h5>
                                <div>
                                    <button
                                        class="chat-header-btn"
                                        onclick={toggle_expand}
                                        aria-label={if *is_expanded { "Minimize chat" } else { "Expand chat" }}
                                    >
                                        { if *is_expanded { "🗕" } else { "🗖" } }
                                    </button>
                                    <button
                                        class="chat-header-btn"
                                        onclick={toggle_chat}
                                        aria-label="Close chat"
                                    >
                                        {"✕"}
                                    </button>
                                </div>
                            </div>

                            <div class="chat-transcript" style={format!("background-color: {};", theme.chat_bg)}>
                                {
                                    messages.iter().map(|message| {
                                        let (row_class, radius, bg, color) = if message.is_user {
                                            (
                                                "chat-row-user",
                                                "15px 15px 0 15px",
                                                "var(--primary-color)".to_string(),
                                                "#fff".to_string(),
                                            )
                                        } else {
                                            (
                                                "chat-row-bot",
                                                "15px 15px 15px 0",
                                                theme.message_bg_bot.to_string(),
                                                theme.message_text_bot.to_string(),
                                            )
                                        };
                                        html! {
                                            <div class={row_class} key={message.id}>
                                                <div
                                                    class="chat-bubble"
                                                    style={format!(
                                                        "border-radius: {radius}; background-color: {bg}; color: {color};"
                                                    )}
                                                >
                                                    <div class="bubble-meta" style={format!("color: {};", theme.muted_text)}>
                                                        { if message.is_user { "🧑 " } else { "🤖 " } }
                                                        { message.timestamp.format("%H:%M").to_string() }
                                                    </div>
                                                    <div>{ &message.text }</div>
                                                </div>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                                {
                                    if *is_typing {
                                        html! {
                                            <div class="chat-row-bot">
                                                <div
                                                    class="chat-bubble"
                                                    style={format!(
                                                        "border-radius: 15px 15px 15px 0; background-color: {};",
                                                        theme.message_bg_bot
                                                    )}
                                                >
                                                    <div class="typing-indicator">
                                                        <span style={format!("background-color: {};", theme.muted_text)}></span>
                                                        <span style={format!("background-color: {};", theme.muted_text)}></span>
                                                        <span style={format!("background-color: {};", theme.muted_text)}></span>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div ref={messages_end}></div>
                            </div>

                            <form
                                class="chat-input-row"
                                style={format!("border-color: {}; background-color: {};", theme.border, theme.chat_bg)}
                                onsubmit={on_submit}
                            >
                                <input
                                    type="text"
                                    class="chat-input"
                                    placeholder="Type your message..."
                                    value={(*input_value).clone()}
                                    oninput={on_input}
                                    style={format!(
                                        "background-color: {}; color: {}; border-color: {};",
                                        theme.input_bg, theme.input_text, theme.border
                                    )}
                                />
                                <button
                                    type="submit"
                                    class="chat-send-btn"
                                    disabled={sendable(&input_value).is_none()}
                                >
                                    {"Send"}
                                </button>
                            </form>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

// Asks the backend proxy for the next assistant turn. Failures are
// logged to the console and reported as `None`; substituting the
// fallback reply is the caller's job.
async fn fetch_reply(history: &[ApiMessage]) -> Option<String> {
    let request = ChatRequest {
        messages: history.to_vec(),
    };

    let response = match Request::post(&format!("{}/api/chat", config::get_backend_url()))
        .json(&request)
        .expect("chat request serializes")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            log!("chat request failed:", e.to_string());
            return None;
        }
    };

    if !response.ok() {
        log!("chat proxy returned status:", response.status());
        return None;
    }

    match response.json::<ChatResponse>().await {
        Ok(body) => Some(body.reply),
        Err(e) => {
            log!("chat response did not parse:", e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_delay_scales_with_reply_length() {
        assert_eq!(typing_delay_ms(""), 0);
        assert_eq!(typing_delay_ms(&"x".repeat(42)), 420);
        assert_eq!(typing_delay_ms(&"x".repeat(150)), 1_500);
    }

    #[test]
    fn typing_delay_is_capped() {
        assert_eq!(typing_delay_ms(&"x".repeat(151)), 1_500);
        assert_eq!(typing_delay_ms(&"x".repeat(10_000)), 1_500);
    }

    #[test]
    fn typing_delay_counts_characters_not_bytes() {
        // Four bytes, one character.
        assert_eq!("👋".len(), 4);
        assert_eq!(typing_delay_ms("👋"), 10);
        assert_eq!(typing_delay_ms("👋 Hi"), 40);
    }

    #[test]
    fn failed_exchange_is_not_recorded_in_history() {
        let sent = vec![
            ApiMessage::new("system", "prompt"),
            ApiMessage::new("user", "hello"),
        ];

        assert_eq!(history_after_exchange(sent.clone(), &None), None);
        assert_eq!(displayed_reply(&None), FALLBACK_REPLY);
    }

    #[test]
    fn successful_exchange_appends_the_assistant_turn() {
        let sent = vec![
            ApiMessage::new("system", "prompt"),
            ApiMessage::new("user", "hello"),
        ];
        let outcome = Some("We offer 40-70% of retail value.".to_string());

        let turns = history_after_exchange(sent.clone(), &outcome).unwrap();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[..2], sent[..]);
        assert_eq!(turns[2].role, "assistant");
        assert_eq!(turns[2].content, "We offer 40-70% of retail value.");
        assert_eq!(displayed_reply(&outcome), "We offer 40-70% of retail value.");
    }

    #[test]
    fn whitespace_only_input_is_not_sendable() {
        assert_eq!(sendable(""), None);
        assert_eq!(sendable("   \t\n"), None);
        assert_eq!(sendable("  hello "), Some("hello"));
    }

    #[test]
    fn message_ids_are_sequential() {
        assert_eq!(next_message_id(1), 2);
        assert_eq!(next_message_id(2), 3);
    }

    #[test]
    fn drag_tracks_the_pointer_monotonically() {
        let offset = (12.0, 8.0);
        let (x1, y1) = drag_position(100.0, 200.0, offset);
        let (x2, y2) = drag_position(140.0, 260.0, offset);
        assert_eq!((x1, y1), (88.0, 192.0));
        assert!(x2 > x1 && y2 > y1);
        assert_eq!((x2 - x1, y2 - y1), (40.0, 60.0));
    }

    #[test]
    fn panel_grows_when_expanded() {
        assert_eq!(panel_size(false, 1280.0), ("350px", "500px"));
        assert_eq!(panel_size(true, 1280.0), ("450px", "600px"));
        assert_eq!(panel_size(false, 600.0), ("85vw", "60vh"));
        assert_eq!(panel_size(true, 600.0), ("90vw", "70vh"));
    }
}
