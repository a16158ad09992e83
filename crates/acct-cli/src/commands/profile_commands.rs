use std::path::PathBuf;

use clap::{ArgGroup, Subcommand};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print the profile as returned by the server
    Show,

    /// Token balance and usage
    Usage,

    /// Change the display name
    SetName {
        /// New display name
        name: String,
    },

    /// Change the phone number
    SetPhone {
        /// New phone number
        phone: String,
    },

    /// Set the profile picture
    #[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
    SetImage {
        /// Image URL
        #[arg(long)]
        url: Option<String>,

        /// Local image file, uploaded as a data URL
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Remove the profile picture
    RemoveImage,
}
