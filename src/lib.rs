
pub mod gnss;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavMsgErr {
	InvalidFrame(&'static str),
	Other(&'static str),
}
