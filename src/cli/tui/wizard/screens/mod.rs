//! Render functions for each wizard stage.

pub mod confirmed;
pub mod intro;
pub mod selecting;
