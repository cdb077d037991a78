use crate::components::print_button::PrintButton;
use crate::print::PrintHost;
use yew::prelude::*;

/// Composition root mounted by the WASM entry point.
#[function_component(App)]
pub fn app() -> Html {
    let host = use_memo((), |()| PrintHost::window());
    html! {
        <ContextProvider<PrintHost> context={(*host).clone()}>
            <main id="main" role="main" class="print-actions">
                <PrintButton />
            </main>
        </ContextProvider<PrintHost>>
    }
}
