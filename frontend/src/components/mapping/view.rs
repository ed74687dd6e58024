//! Markup of the mapping page.
//!
//! Rows come from the render model in `common::render`; this module only
//! turns that description into Yew nodes.

use common::model::Role;
use common::render::{
    error_table, LoadState, MappingRow, MappingsTable, RowAction, SelectOption, SelectionRow,
    TableRow, TABLE_COLUMNS, VIEW_ONLY_TEXT,
};
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::MappingPage;

const CELL: &str = "p-3 border";

pub fn view(component: &MappingPage, ctx: &Context<MappingPage>) -> Html {
    let link = ctx.link();
    let auth = &ctx.props().auth;

    html! {
        <div class="max-w-5xl mx-auto p-6 space-y-8">
            { build_header(auth.email(), auth.role, link) }
            { build_create_section(component, link) }
            { build_mappings_section(component, link) }
        </div>
    }
}

fn build_header(email: &str, role: Role, link: &Scope<MappingPage>) -> Html {
    html! {
        <div class="flex items-center justify-between">
            <h1 class="text-2xl font-semibold">{"Store Market Mapping"}</h1>
            <div class="flex items-center gap-3 text-sm">
                <span id="userEmail">{ email.to_string() }</span>
                <span class="px-2 py-1 rounded bg-gray-200 text-gray-700">{ role.to_string() }</span>
                <button
                    class="px-3 py-1 bg-gray-700 text-white rounded"
                    onclick={link.callback(|_| Msg::SignOut)}
                >
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}

fn build_create_section(component: &MappingPage, link: &Scope<MappingPage>) -> Html {
    let body = match &component.reference {
        LoadState::Loading => status_row("Loading stores and markets…", 3, false),
        LoadState::Failed(message) => status_row(message, 3, true),
        LoadState::Loaded(row) => build_selection_row(row, link),
    };

    html! {
        <section>
            <h2 class="text-lg font-medium mb-2">{"Create mapping"}</h2>
            <table class="w-full border-collapse">
                <thead>
                    <tr class="bg-gray-100">
                        <th class={CELL}>{"Market"}</th>
                        <th class={CELL}>{"Store"}</th>
                        <th class={CELL}>{"Action"}</th>
                    </tr>
                </thead>
                <tbody id="storeTable">{ body }</tbody>
            </table>
        </section>
    }
}

fn build_selection_row(row: &SelectionRow, link: &Scope<MappingPage>) -> Html {
    let on_market = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectMarket(select.value())
    });
    let on_store = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectStore(select.value())
    });

    html! {
        <tr>
            <td class={CELL}>
                <select id="market" class="p-2 border rounded w-full" onchange={on_market}>
                    { for row.markets.iter().map(option) }
                </select>
            </td>
            <td class={CELL}>
                <select id="store" class="p-2 border rounded w-full" onchange={on_store}>
                    { for row.stores.iter().map(option) }
                </select>
            </td>
            <td class={CELL}>
                <button
                    class="px-4 py-2 bg-blue-600 text-white rounded"
                    onclick={link.callback(|_| Msg::Save)}
                >
                    {"Save"}
                </button>
            </td>
        </tr>
    }
}

fn option(opt: &SelectOption) -> Html {
    html! {
        <option value={opt.value.clone()}>{ opt.label.clone() }</option>
    }
}

fn build_mappings_section(component: &MappingPage, link: &Scope<MappingPage>) -> Html {
    let body = match &component.table {
        LoadState::Loading => status_row("Loading mappings…", TABLE_COLUMNS, false),
        LoadState::Failed(message) => build_table_body(&error_table(message), link),
        LoadState::Loaded(table) => build_table_body(table, link),
    };

    html! {
        <section>
            <h2 class="text-lg font-medium mb-2">{"Current mappings"}</h2>
            <table class="w-full border-collapse">
                <thead>
                    <tr class="bg-gray-100">
                        <th class={CELL}>{"Store"}</th>
                        <th class={CELL}>{"Market"}</th>
                        <th class={CELL}>{"Updated by"}</th>
                        <th class={CELL}>{"Updated at"}</th>
                        <th class={CELL}>{"Action"}</th>
                    </tr>
                </thead>
                <tbody id="mappingTableBody">{ body }</tbody>
            </table>
        </section>
    }
}

fn build_table_body(table: &MappingsTable, link: &Scope<MappingPage>) -> Html {
    html! {
        <>
            { for table.rows.iter().map(|row| match row {
                TableRow::Mapping(mapping) => build_mapping_row(mapping, link),
                TableRow::Placeholder { text, colspan } => status_row(text, *colspan, false),
                TableRow::Error { text, colspan } => status_row(text, *colspan, true),
            }) }
        </>
    }
}

fn build_mapping_row(row: &MappingRow, link: &Scope<MappingPage>) -> Html {
    let action = match &row.action {
        RowAction::Delete { store_name } => {
            let store_name = store_name.clone();
            html! {
                <button
                    class="px-3 py-1 bg-red-600 text-white rounded text-xs"
                    onclick={link.callback(move |_| Msg::Delete(store_name.clone()))}
                >
                    {"Delete"}
                </button>
            }
        }
        RowAction::ViewOnly => html! {
            <span class="text-gray-500 italic">{ VIEW_ONLY_TEXT }</span>
        },
    };

    html! {
        <tr key={row.store.clone()}>
            <td class={CELL}>{ row.store.clone() }</td>
            <td class={CELL}>{ row.market.clone() }</td>
            <td class={CELL}>{ row.updated_by.clone() }</td>
            <td class={CELL}>{ row.updated_at.clone() }</td>
            <td class={CELL}>{ action }</td>
        </tr>
    }
}

/// One full-width row carrying a status or error message.
fn status_row(text: &str, colspan: usize, error: bool) -> Html {
    let class = if error {
        "p-4 text-center text-red-600"
    } else {
        "p-4 text-center text-gray-500"
    };
    html! {
        <tr>
            <td colspan={colspan.to_string()} class={class}>{ text.to_string() }</td>
        </tr>
    }
}
