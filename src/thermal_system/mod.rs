pub mod thin_skin;
