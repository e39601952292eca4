//! GreatSPN PNPRO exchange format
//!
//! A PNPRO project wraps one `gspn` element holding `nodes` (places and
//! transitions) and `edges` (arcs):
//!
//! ```xml
//! <project name="demo" version="121">
//!   <gspn name="mutex">
//!     <nodes>
//!       <place marking="1" name="P1" x="10" y="20"/>
//!       <transition name="T1" type="EXP" delay="1.0" nservers="1" x="10" y="30"/>
//!     </nodes>
//!     <edges>
//!       <arc head="T1" kind="INPUT" tail="P1"/>
//!     </edges>
//!   </gspn>
//! </project>
//! ```

mod attributes;
mod parser;

pub use parser::PnproParser;
