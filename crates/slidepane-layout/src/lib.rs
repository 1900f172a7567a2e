//! Layout contracts for Slidepane
//!
//! The panel positions host-owned elements through the [`Element`] seam and
//! never touches platform views directly. This crate holds that seam plus the
//! axis/constraint math shared by the measure policy and the gesture code.

mod alignment;
mod axis;
mod constraints;
mod element;
mod normalize;

pub use alignment::*;
pub use axis::*;
pub use constraints::*;
pub use element::*;
pub use normalize::*;

pub mod prelude {
    pub use crate::alignment::CrossAxisAlignment;
    pub use crate::axis::Axis;
    pub use crate::constraints::Constraints;
    pub use crate::element::{ChildParams, Element, ElementId, ElementRef};
}
