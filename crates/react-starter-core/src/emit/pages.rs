//! Pages, the route tree and the App entry component

use super::template::{write_all, Template};
use crate::config::RunConfig;
use crate::error::Result;
use std::path::Path;

const HOME_STYLE: &str = ".title {
  font-size: 2rem;
}
";

const NOT_FOUND: &str = r#"import styles from "./notfound.module.scss"

export default function NotFound() {
  return (
    <div className={styles.wrapper}>
      <h1>404</h1>
      <p>Cette page n'existe pas.</p>
    </div>
  )
}
"#;

const NOT_FOUND_STYLE: &str = ".wrapper {
  text-align: center;
  padding: 5rem;
  color: #999;

  h1 {
    font-size: 6rem;
    margin-bottom: 1rem;
  }

  p {
    font-size: 1.25rem;
  }
}
";

const ROUTES_INDEX: &str = r#"import { BrowserRouter as Router, Routes, Route } from 'react-router-dom'
import { ROUTES } from '../constants/routes'
import DefaultLayout from '../layouts/DefaultLayout'
import Home from '../pages/home/Home'
import NotFound from '../pages/notfound/NotFound'

const AppRoutes = () => {
  return (
    <Router>
      <Routes>
        <Route path={ROUTES.HOME} element={<DefaultLayout />}>
          <Route index element={<Home />} />
          <Route path={ROUTES.NOT_FOUND} element={<NotFound />} />
        </Route>
      </Routes>
    </Router>
  )
}

export default AppRoutes
"#;

const REQUIRE_AUTH_JS: &str = r#"import { Navigate, useLocation } from 'react-router-dom'

// Simule un user connecté — à remplacer par ton vrai système d'auth
const useAuth = () => {
  const user = JSON.parse(localStorage.getItem('user'))
  return user // null si pas connecté
}

export default function RequireAuth({ children, role }) {
  const user = useAuth()
  const location = useLocation()

  if (!user) {
    return <Navigate to="/login" state={{ from: location }} replace />
  }

  // Vérifie un rôle spécifique si demandé
  if (role && user.role !== role) {
    return <Navigate to="/unauthorized" replace />
  }

  return children
}
"#;

const REQUIRE_AUTH_TS: &str = r#"import type { ReactElement } from 'react'
import { Navigate, useLocation } from 'react-router-dom'

type User = { role?: string }

type RequireAuthProps = {
  children: ReactElement
  role?: string
}

// Simule un user connecté — à remplacer par ton vrai système d'auth
const useAuth = (): User | null => {
  return JSON.parse(localStorage.getItem('user') ?? 'null')
}

export default function RequireAuth({ children, role }: RequireAuthProps) {
  const user = useAuth()
  const location = useLocation()

  if (!user) {
    return <Navigate to="/login" state={{ from: location }} replace />
  }

  // Vérifie un rôle spécifique si demandé
  if (role && user.role !== role) {
    return <Navigate to="/unauthorized" replace />
  }

  return children
}
"#;

const APP: &str = r#"import AppRoutes from "./routes"

function App() {
  return <AppRoutes />
}

export default App
"#;

fn home(project_name: &str) -> String {
    format!(
        r#"import styles from "./home.module.scss"

export default function Home() {{
  return <h1 className={{styles.title}}>Homepage: Commencez "{project_name}"</h1>
}}
"#
    )
}

pub fn not_found_templates(config: &RunConfig) -> Vec<Template> {
    vec![
        Template::new(
            format!("src/pages/notfound/NotFound.{}", config.extension()),
            NOT_FOUND,
        ),
        Template::new("src/pages/notfound/notfound.module.scss", NOT_FOUND_STYLE),
    ]
}

pub fn home_and_routing_templates(config: &RunConfig) -> Vec<Template> {
    let ext = config.extension();
    let require_auth = if config.typescript() {
        REQUIRE_AUTH_TS
    } else {
        REQUIRE_AUTH_JS
    };
    vec![
        Template::new(
            format!("src/pages/home/Home.{ext}"),
            home(config.project_name.as_str()),
        ),
        Template::new("src/pages/home/home.module.scss", HOME_STYLE),
        Template::new(format!("src/routes/index.{ext}"), ROUTES_INDEX),
        Template::new(format!("src/routes/RequireAuth.{ext}"), require_auth),
    ]
}

pub fn app_templates(config: &RunConfig) -> Vec<Template> {
    vec![Template::new(format!("src/App.{}", config.extension()), APP)]
}

pub async fn emit_not_found(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &not_found_templates(config)).await?;
    Ok(())
}

pub async fn emit_home_and_routing(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &home_and_routing_templates(config)).await?;
    Ok(())
}

pub async fn emit_app(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &app_templates(config)).await?;
    Ok(())
}
