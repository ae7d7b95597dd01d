//! Gallery domain: users, images, tags, and votes.

pub mod requests;
pub mod tags;
pub mod types;

pub use requests::{Credentials, LoginResponse, MessageResponse, VoteBody};
pub use tags::parse_tag_list;
pub use types::{
    Image, ImageListing, InvalidVoteValue, NewImage, NewUser, Tag, User, Vote, VoteValue,
};
