use crate::a11y::is_activation_key;
use crate::components::daisy_ui::{Button, ButtonVariant};
use crate::print::PrintHost;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

pub const PRINT_LABEL: &str = "Print";

/// Opens the host's print dialog.
///
/// Takes no properties. The print host comes from a `ContextProvider<PrintHost>`
/// when one is mounted above, otherwise the browser window is used.
#[function_component(PrintButton)]
pub fn print_button() -> Html {
    let host = use_context::<PrintHost>().unwrap_or_default();

    let onclick = {
        let host = host.clone();
        Callback::from(move |_: MouseEvent| host.request())
    };
    // The browser turns Enter/Space on a focused button into a click as well;
    // preventDefault keeps it to one request per key press. Auto-repeat from a
    // held key is swallowed.
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if is_activation_key(&e.key()) {
            e.prevent_default();
            if !e.repeat() {
                host.request();
            }
        }
    });

    html! {
        <Button variant={ButtonVariant::Outline} {onclick} {onkeydown}>
            { PRINT_LABEL }
        </Button>
    }
}
