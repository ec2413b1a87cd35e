/*!
Types without a more specific home.
*/

pub mod err;
