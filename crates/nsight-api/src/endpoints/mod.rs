// Endpoint methods for `ApiClient`, grouped by dashboard feature area.
// Each file adds inherent methods via its own `impl ApiClient` block.

mod admin;
mod antivirus;
mod assets;
mod checks;
mod history;
mod inventory;
mod patches;
