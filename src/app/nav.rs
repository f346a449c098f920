use leptos::prelude::*;

use crate::content::{IDENTITY, NAV_ITEMS};
use crate::glyph::Glyph;

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="bg-transparent">
            <div class="mx-auto max-w-6xl px-4 sm:px-6">
                <div class="flex items-center justify-between min-h-16">
                    <div class="flex-grow text-xl font-bold text-ink">{IDENTITY.brand}</div>
                    <nav class="hidden md:flex">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="mx-2 px-2 py-1.5 rounded-md text-sm font-medium uppercase text-ink hover:bg-primary/10 transition-colors duration-200"
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        aria-label="menu"
                        aria-expanded=move || menu_open.get().to_string()
                        class="md:hidden p-3 text-2xl text-ink"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <i class=Glyph::Menu.class()></i>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden flex flex-col pb-2 bg-paper rounded-md shadow">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="px-4 py-2 text-sm font-medium uppercase text-ink"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
