pub mod building_card;
pub mod building_form_modal;
pub mod building_image_input;
pub mod confirm_delete_modal;
pub mod modal;
pub mod settings_tab_header;
pub mod zone_settings_form;

pub use building_card::BuildingCard;
pub use building_form_modal::BuildingFormModal;
pub use building_image_input::BuildingImageInput;
pub use confirm_delete_modal::ConfirmDeleteModal;
pub use modal::Modal;
pub use settings_tab_header::{SettingsLayout, SettingsTab};
pub use zone_settings_form::ZoneSettingsForm;
