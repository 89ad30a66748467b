use payloads::{
    Building, BuildingId,
    requests::{BuildingDetails, EmbeddedImage},
};
use std::rc::Rc;
use yew::Reducible;

/// Which building form, if any, is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BuildingDialog {
    #[default]
    Closed,
    Create,
    Edit(Building),
}

impl BuildingDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, BuildingDialog::Closed)
    }

    pub fn editing_id(&self) -> Option<BuildingId> {
        match self {
            BuildingDialog::Edit(building) => Some(building.id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuildingDialog::Edit(_) => "Edit Building",
            _ => "Create Building",
        }
    }

    /// Initial form values for the dialog.
    pub fn initial_form(&self) -> BuildingForm {
        match self {
            BuildingDialog::Edit(building) => BuildingForm::from(building),
            _ => BuildingForm::default(),
        }
    }
}

/// Editable building fields as typed into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildingForm {
    pub name: String,
    pub code: String,
    pub street1: String,
    pub street2: String,
    pub suburb: String,
    pub region: String,
    pub postcode: String,
    /// A newly picked image. Not populated from the existing building.
    pub image: Option<EmbeddedImage>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildingField {
    Name,
    Code,
    Street1,
    Street2,
    Suburb,
    Region,
    Postcode,
}

impl BuildingForm {
    pub fn set(&mut self, field: BuildingField, value: String) {
        let slot = match field {
            BuildingField::Name => &mut self.name,
            BuildingField::Code => &mut self.code,
            BuildingField::Street1 => &mut self.street1,
            BuildingField::Street2 => &mut self.street2,
            BuildingField::Suburb => &mut self.suburb,
            BuildingField::Region => &mut self.region,
            BuildingField::Postcode => &mut self.postcode,
        };
        *slot = value;
    }

    pub fn get(&self, field: BuildingField) -> &str {
        match field {
            BuildingField::Name => &self.name,
            BuildingField::Code => &self.code,
            BuildingField::Street1 => &self.street1,
            BuildingField::Street2 => &self.street2,
            BuildingField::Suburb => &self.suburb,
            BuildingField::Region => &self.region,
            BuildingField::Postcode => &self.postcode,
        }
    }

    /// Request body for the form. Text is trimmed, region codes are
    /// upper-cased, and a blank second street line is sent as absent.
    pub fn to_details(&self) -> BuildingDetails {
        let street2 = self.street2.trim();
        BuildingDetails {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            street1: self.street1.trim().to_string(),
            street2: (!street2.is_empty()).then(|| street2.to_string()),
            suburb: self.suburb.trim().to_string(),
            region: self.region.trim().to_uppercase(),
            postcode: self.postcode.trim().to_string(),
            image: self.image.clone(),
        }
    }
}

/// A single edit to the form. Applied to whatever the form holds when it
/// lands, so an image that finishes reading late keeps the text typed
/// meanwhile.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildingFormAction {
    Field(BuildingField, String),
    Image(Option<EmbeddedImage>),
}

impl Reducible for BuildingForm {
    type Action = BuildingFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BuildingFormAction::Field(field, value) => next.set(field, value),
            BuildingFormAction::Image(image) => next.image = image,
        }
        Rc::new(next)
    }
}

impl From<&Building> for BuildingForm {
    fn from(building: &Building) -> Self {
        Self {
            name: building.name.clone(),
            code: building.code.clone(),
            street1: building.street1.clone(),
            street2: building.street2.clone().unwrap_or_default(),
            suburb: building.suburb.clone(),
            region: building.region.clone(),
            postcode: building.postcode.clone(),
            image: None,
        }
    }
}
