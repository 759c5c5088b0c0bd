use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use shared::constants::SITE_NAME;
use shared::shared_reveal_flow::{Notification, NotificationKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Event};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::timers::PendingTimeouts;
use crate::{styles, Route};

const NOTIFICATION_EVENT: &str = "notification";

/// Shows a toast from anywhere on the page. The layout listens for these.
pub fn dispatch_notification(notification: &Notification) {
    let Some(window) = window() else { return };
    let detail = match serde_json::to_string(notification) {
        Ok(detail) => detail,
        Err(e) => {
            log::warn!("Could not encode notification: {}", e);
            return;
        }
    };

    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&detail));
    match CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &event_init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("Could not create notification event: {:?}", e),
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u32,
    notification: Notification,
}

#[derive(Default, PartialEq)]
struct Toasts {
    visible: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut visible = self.visible.clone();
        match action {
            ToastAction::Push(toast) => visible.push(toast),
            ToastAction::Dismiss(id) => visible.retain(|toast| toast.id != id),
        }
        Rc::new(Self { visible })
    }
}

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => styles::TOAST_SUCCESS,
        NotificationKind::Error => styles::TOAST_ERROR,
        NotificationKind::Info => styles::TOAST_INFO,
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
    #[prop_or(false)]
    pub plain: bool,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let toasts = use_reducer(Toasts::default);

    {
        let toasts = toasts.dispatcher();
        use_effect_with((), move |_| {
            let next_id = Rc::new(Cell::new(0u32));
            let dismissals: Rc<RefCell<PendingTimeouts<u32>>> = Rc::default();
            let listener = window().map(|window| {
                let dismissals = dismissals.clone();
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    let Some(custom_event) = event.dyn_ref::<CustomEvent>() else { return };
                    let Some(detail) = custom_event.detail().as_string() else { return };
                    match serde_json::from_str::<Notification>(&detail) {
                        Ok(notification) => {
                            let id = next_id.get();
                            next_id.set(id.wrapping_add(1));
                            let duration = notification.duration_ms;
                            toasts.dispatch(ToastAction::Push(Toast { id, notification }));

                            let toasts = toasts.clone();
                            let settled = dismissals.clone();
                            let timeout = Timeout::new(duration, move || {
                                settled.borrow_mut().settle(&id);
                                toasts.dispatch(ToastAction::Dismiss(id));
                            });
                            dismissals.borrow_mut().arm(id, timeout);
                        }
                        Err(e) => log::warn!("Malformed notification: {}", e),
                    }
                })
            });

            move || {
                drop(listener);
                dismissals.borrow_mut().clear();
            }
        });
    }

    html! {
        <div class={if props.plain { styles::PAGE_PLAIN } else { styles::PAGE }}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                        <span class={styles::GOLD_BRIGHT}>{"MATILDA"}</span>
                        <span>{" MEDIA"}</span>
                    </Link<Route>>
                    <div class="flex items-center space-x-2">
                        <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"Etusivu"}</Link<Route>>
                        <Link<Route> to={Route::Blog} classes={styles::NAV_LINK}>{"Blogi"}</Link<Route>>
                    </div>
                </div>
            </nav>
            <div class={styles::TOAST_STACK}>
                { for toasts.visible.iter().map(|toast| html! {
                    <div key={toast.id} class={toast_class(toast.notification.kind)} role="status">
                        {&toast.notification.message}
                    </div>
                }) }
            </div>
            <main class="pt-16">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <Link<Route> to={Route::Home} classes="inline-block text-2xl font-bold mb-4 hover:opacity-80 transition-opacity">
                    {SITE_NAME}
                </Link<Route>>
                <p class={styles::FOOTER_TEXT}>{"© 2026 Matilda Media. Helsinki, Suomi."}</p>
            </footer>
        </div>
    }
}
